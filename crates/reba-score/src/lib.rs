//! REBA Score - worksheet tables and final score composition
//!
//! - Table A: neck, trunk and legs
//! - Table B: upper arm, forearm and wrist
//! - Table C: combines A and B
//!
//! Every table index is clamped before lookup. Adjusted scores can exceed
//! the table dimensions; the clamp is the correctness boundary.

pub mod adjust;
pub mod composer;
pub mod risk;
pub mod tables;

pub use adjust::*;
pub use composer::*;
pub use risk::*;
pub use tables::*;
