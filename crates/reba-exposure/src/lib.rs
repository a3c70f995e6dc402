//! REBA Exposure - posture exposure over time
//!
//! REBA scores a posture *held* over an observation window, not an
//! instantaneous pose. Each body segment keeps a histogram of seconds spent
//! in each of its REBA angle ranges, and its score is the score of the
//! range held longest so far.
//!
//! The score is therefore history-dependent: a brief excursion does not move
//! it, and a momentarily lost landmark does not erase it.

pub mod exposure;
pub mod field;
pub mod segment;

pub use exposure::*;
pub use field::*;
pub use segment::*;
