//! REBA Runtime - session orchestration
//!
//! One pass per incoming frame, no internal parallelism:
//! 1. Derive elapsed time from frame timestamps
//! 2. Measure angles and posture flags
//! 3. Fold the angles into per-segment exposure
//! 4. Look up Tables A, B and C
//! 5. Compose the final score and risk level
//!
//! Each stream owns its own `RebaSession`. There is no shared state between
//! sessions.

pub mod config;
pub mod session;
pub mod snapshot;
pub mod telemetry;

pub use config::*;
pub use session::*;
pub use snapshot::*;
pub use telemetry::*;
