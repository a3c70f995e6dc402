//! Landmarks - body keypoints as delivered by the pose detector
//!
//! The engine never mutates landmarks. Every frame carries a fresh ordered
//! sequence in the 33-point BlazePose layout; only the first 27 points are
//! read.

use serde::{Deserialize, Serialize};

use crate::FrameTime;

/// Visibility a landmark must reach to count as detected
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.3;

/// Semantic landmark positions in the detector output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LandmarkIndex {
    // Head
    Nose = 0,
    LeftEar = 7,
    RightEar = 8,

    // Left arm
    LeftShoulder = 11,
    LeftElbow = 13,
    LeftWrist = 15,
    LeftIndex = 19,

    // Right arm
    RightShoulder = 12,
    RightElbow = 14,
    RightWrist = 16,
    RightIndex = 20,

    // Legs
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
}

impl LandmarkIndex {
    /// All landmarks the engine reads
    pub fn all() -> &'static [LandmarkIndex] {
        &[
            LandmarkIndex::Nose,
            LandmarkIndex::LeftEar,
            LandmarkIndex::RightEar,
            LandmarkIndex::LeftShoulder,
            LandmarkIndex::RightShoulder,
            LandmarkIndex::LeftElbow,
            LandmarkIndex::RightElbow,
            LandmarkIndex::LeftWrist,
            LandmarkIndex::RightWrist,
            LandmarkIndex::LeftIndex,
            LandmarkIndex::RightIndex,
            LandmarkIndex::LeftHip,
            LandmarkIndex::RightHip,
            LandmarkIndex::LeftKnee,
            LandmarkIndex::RightKnee,
        ]
    }

    /// Number of leading detector points the engine depends on
    pub const fn required_len() -> usize {
        27
    }

    #[inline]
    pub fn position(self) -> usize {
        self as usize
    }
}

/// 2D point in normalized image coordinates (Y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Vector from `self` to `other`
    pub fn to(&self, other: &Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }
}

/// A single detected keypoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    /// Confidence-like visibility, absent for detectors that do not report it
    #[serde(default)]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self {
            x,
            y,
            visibility: Some(visibility),
        }
    }

    /// Landmark without a visibility score
    pub fn without_visibility(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            visibility: None,
        }
    }

    /// Numeric visibility, if the detector supplied a well-formed one
    #[inline]
    pub fn numeric_visibility(&self) -> Option<f32> {
        self.visibility.filter(|v| v.is_finite())
    }

    /// A landmark is detected when its visibility clears the threshold.
    /// Without a usable visibility, well-formed coordinates are enough.
    pub fn is_detected(&self, threshold: f32) -> bool {
        match self.numeric_visibility() {
            Some(v) => v >= threshold,
            None => self.x.is_finite() && self.y.is_finite(),
        }
    }

    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

/// One frame of detector output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Capture time of the frame
    #[serde(default, rename = "timestamp_ms", with = "millis")]
    pub timestamp: FrameTime,

    /// Landmarks in detector order
    pub landmarks: Vec<Landmark>,
}

impl LandmarkFrame {
    pub fn new(timestamp: FrameTime, landmarks: Vec<Landmark>) -> Self {
        Self {
            timestamp,
            landmarks,
        }
    }

    /// Frame with every position empty (nothing detected)
    pub fn empty(timestamp: FrameTime) -> Self {
        Self {
            timestamp,
            landmarks: Vec::new(),
        }
    }

    /// Get a landmark by semantic index
    pub fn get(&self, index: LandmarkIndex) -> Option<&Landmark> {
        self.landmarks.get(index.position())
    }

    /// Set a landmark, growing the frame with undetected points if needed
    pub fn set(&mut self, index: LandmarkIndex, landmark: Landmark) {
        let idx = index.position();
        if idx >= self.landmarks.len() {
            self.landmarks
                .resize(idx + 1, Landmark::new(0.0, 0.0, 0.0));
        }
        self.landmarks[idx] = landmark;
    }

    /// Get a landmark only if it counts as detected
    pub fn detected(&self, index: LandmarkIndex, threshold: f32) -> Option<&Landmark> {
        self.get(index).filter(|l| l.is_detected(threshold))
    }

    /// Position of a detected landmark
    pub fn point(&self, index: LandmarkIndex, threshold: f32) -> Option<Point> {
        self.detected(index, threshold).map(Landmark::point)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::FrameTime;

    pub fn serialize<S: Serializer>(t: &FrameTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(t.as_millis())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<FrameTime, D::Error> {
        i64::deserialize(d).map(FrameTime::from_millis)
    }
}
