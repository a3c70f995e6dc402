//! REBA Pose - Landmark geometry
//!
//! Turns one frame of landmarks into the joint angles and binary posture
//! flags the REBA worksheet asks for. Everything here is stateless.
//!
//! # Angle convention
//!
//! Every angle is the absolute deviation, in degrees, between a segment
//! vector and a fixed image axis:
//!
//! - Trunk and neck against "up" (0, -1): 0° is upright
//! - Limbs against "down" (0, +1): 0° is hanging straight down
//!
//! Missing or low-visibility landmarks yield `None` for exactly the angles
//! and flags that depend on them. Partial results are normal.

pub mod angles;
pub mod pose;

pub use angles::*;
pub use pose::*;
