//! Time primitives for the REBA engine
//!
//! Frames are tagged with a `FrameTime` by the frame source. The engine only
//! ever consumes the difference between two frame times, in seconds.

use std::ops::{Add, Sub};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Frame time - microseconds since the start of the analysis session
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct FrameTime(pub i64);

impl FrameTime {
    pub const ZERO: FrameTime = FrameTime(0);

    #[inline]
    pub fn from_micros(micros: i64) -> Self {
        FrameTime(micros)
    }

    #[inline]
    pub fn from_millis(millis: i64) -> Self {
        FrameTime(millis.saturating_mul(1000))
    }

    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        // Float to int casts saturate, NaN maps to zero
        FrameTime((secs * 1_000_000.0) as i64)
    }

    #[inline]
    pub fn as_micros(self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0 / 1000
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Seconds elapsed since `earlier`, or `None` if time went backwards
    #[inline]
    pub fn secs_since(self, earlier: FrameTime) -> Option<f64> {
        if self < earlier {
            None
        } else {
            Some((self - earlier).as_secs_f64())
        }
    }
}

impl Add<Duration> for FrameTime {
    type Output = FrameTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        let micros = i64::try_from(rhs.as_micros()).unwrap_or(i64::MAX);
        FrameTime(self.0.saturating_add(micros))
    }
}

impl Sub<FrameTime> for FrameTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: FrameTime) -> Self::Output {
        if self.0 >= rhs.0 {
            Duration::from_micros(self.0.abs_diff(rhs.0))
        } else {
            Duration::ZERO
        }
    }
}

impl std::fmt::Debug for FrameTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({:.3}s)", self.as_secs_f64())
    }
}
