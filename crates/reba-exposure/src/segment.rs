//! Body segments and their REBA range tables

use reba_pose::LegPosture;
use serde::{Deserialize, Serialize};

/// Body segments tracked by the exposure model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum BodySegment {
    Trunk = 0,
    Neck = 1,
    Legs = 2,
    Arm = 3,
    Forearm = 4,
    Wrist = 5,
}

impl BodySegment {
    /// All segments in order
    pub fn all() -> &'static [BodySegment] {
        &[
            BodySegment::Trunk,
            BodySegment::Neck,
            BodySegment::Legs,
            BodySegment::Arm,
            BodySegment::Forearm,
            BodySegment::Wrist,
        ]
    }

    /// Number of segments
    pub const fn count() -> usize {
        6
    }

    pub fn name(self) -> &'static str {
        match self {
            BodySegment::Trunk => "trunk",
            BodySegment::Neck => "neck",
            BodySegment::Legs => "legs",
            BodySegment::Arm => "arm",
            BodySegment::Forearm => "forearm",
            BodySegment::Wrist => "wrist",
        }
    }

    /// The fixed range table of this segment
    pub fn bins(self) -> &'static [BinSpec] {
        match self {
            BodySegment::Trunk => TRUNK_BINS,
            BodySegment::Neck => NECK_BINS,
            BodySegment::Legs => LEG_BINS,
            BodySegment::Arm => ARM_BINS,
            BodySegment::Forearm => FOREARM_BINS,
            BodySegment::Wrist => WRIST_BINS,
        }
    }

    /// Classify a reading into one of this segment's bins
    pub fn classify(self, angle: f64, legs: LegPosture) -> Option<usize> {
        self.bins().iter().position(|bin| bin.range.contains(angle, legs))
    }

    /// Index of a bin by label
    pub fn bin_index(self, label: &str) -> Option<usize> {
        self.bins().iter().position(|bin| bin.label == label)
    }
}

impl std::fmt::Display for BodySegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Range matched by a bin. Angles are absolute degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinRange {
    /// angle <= limit
    AtMost(f64),
    /// angle < limit
    Below(f64),
    /// any angle not matched earlier
    Rest,
    /// leg support, ignores the angle
    Posture(LegPosture),
}

impl BinRange {
    #[inline]
    pub fn contains(&self, angle: f64, legs: LegPosture) -> bool {
        match *self {
            BinRange::AtMost(limit) => angle <= limit,
            BinRange::Below(limit) => angle < limit,
            BinRange::Rest => true,
            BinRange::Posture(posture) => posture == legs,
        }
    }
}

/// One REBA range with its worksheet score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpec {
    pub label: &'static str,
    pub range: BinRange,
    pub score: u8,
}

impl BinSpec {
    const fn new(label: &'static str, range: BinRange, score: u8) -> Self {
        BinSpec {
            label,
            range,
            score,
        }
    }
}

pub const TRUNK_BINS: &[BinSpec] = &[
    BinSpec::new("0-20", BinRange::AtMost(20.0), 1),
    BinSpec::new("21-60", BinRange::AtMost(60.0), 3),
    BinSpec::new("61+", BinRange::Rest, 4),
];

pub const NECK_BINS: &[BinSpec] = &[
    BinSpec::new("0-20", BinRange::AtMost(20.0), 1),
    BinSpec::new("21+", BinRange::Rest, 2),
];

pub const LEG_BINS: &[BinSpec] = &[
    BinSpec::new("bilateral", BinRange::Posture(LegPosture::Bilateral), 1),
    BinSpec::new("unilateral", BinRange::Posture(LegPosture::Unilateral), 2),
];

pub const ARM_BINS: &[BinSpec] = &[
    BinSpec::new("0-20", BinRange::AtMost(20.0), 1),
    BinSpec::new("21-45", BinRange::AtMost(45.0), 2),
    BinSpec::new("46-90", BinRange::AtMost(90.0), 3),
    BinSpec::new("91+", BinRange::Rest, 4),
];

pub const FOREARM_BINS: &[BinSpec] = &[
    BinSpec::new("0-59", BinRange::Below(60.0), 2),
    BinSpec::new("60-100", BinRange::AtMost(100.0), 1),
    BinSpec::new("101+", BinRange::Rest, 2),
];

pub const WRIST_BINS: &[BinSpec] = &[
    BinSpec::new("0-15", BinRange::AtMost(15.0), 1),
    BinSpec::new("16+", BinRange::Rest, 2),
];
