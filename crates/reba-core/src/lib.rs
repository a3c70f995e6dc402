//! REBA Core - Fundamental types and primitives
//!
//! This crate defines the types shared by every stage of the scoring engine:
//! - Landmarks and derived points (Landmark, Point, LandmarkIndex)
//! - Per-frame input (LandmarkFrame)
//! - Time primitives (FrameTime)
//! - Error types

pub mod error;
pub mod landmark;
pub mod time;

pub use error::*;
pub use landmark::*;
pub use time::*;
