//! Worksheet adjustments applied before the table lookups

use reba_exposure::{BodySegment, ExposureField};
use reba_pose::PostureFlags;
use serde::{Deserialize, Serialize};

/// Highest adjusted neck, trunk or upper-arm score
pub const MAX_AXIAL_SCORE: i32 = 6;
/// Highest adjusted wrist score
pub const MAX_WRIST_SCORE: i32 = 3;

/// Per-segment posture sub-scores, before adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureScores {
    pub trunk: i32,
    pub neck: i32,
    pub legs: i32,
    pub arm: i32,
    pub forearm: i32,
    pub wrist: i32,
}

impl Default for PostureScores {
    fn default() -> Self {
        PostureScores {
            trunk: 1,
            neck: 1,
            legs: 1,
            arm: 1,
            forearm: 1,
            wrist: 1,
        }
    }
}

impl PostureScores {
    /// Current sub-scores of an exposure field
    pub fn from_field(field: &ExposureField) -> Self {
        let score = |segment: BodySegment| field.get(segment).score() as i32;
        PostureScores {
            trunk: score(BodySegment::Trunk),
            neck: score(BodySegment::Neck),
            legs: score(BodySegment::Legs),
            arm: score(BodySegment::Arm),
            forearm: score(BodySegment::Forearm),
            wrist: score(BodySegment::Wrist),
        }
    }
}

/// Resolved posture flags. Undetermined flags count as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustments {
    pub neck_twisted: bool,
    pub trunk_twisted: bool,
    pub shoulder_raised: bool,
    pub arm_abducted: bool,
    pub arm_supported: bool,
    pub wrist_bent: bool,
    pub wrist_twisted: bool,
}

impl From<&PostureFlags> for Adjustments {
    fn from(flags: &PostureFlags) -> Self {
        Adjustments {
            neck_twisted: flags.neck_twisted.unwrap_or(false),
            trunk_twisted: flags.trunk_twisted.unwrap_or(false),
            shoulder_raised: flags.shoulder_raised.unwrap_or(false),
            arm_abducted: flags.arm_abducted.unwrap_or(false),
            arm_supported: flags.arm_supported.unwrap_or(false),
            wrist_bent: flags.wrist_bent.unwrap_or(false),
            wrist_twisted: flags.wrist_twisted.unwrap_or(false),
        }
    }
}

/// Scores after adjustment, as fed to Tables A and B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustedScores {
    pub neck: i32,
    pub trunk: i32,
    pub legs: i32,
    pub arm: i32,
    pub forearm: i32,
    pub wrist: i32,
}

#[inline]
fn bump(score: i32, flag: bool, cap: i32) -> i32 {
    if flag {
        score.saturating_add(1).min(cap)
    } else {
        score
    }
}

/// Neck +1 if twisted, capped at 6
pub fn adjust_neck(neck: i32, twisted: bool) -> i32 {
    bump(neck, twisted, MAX_AXIAL_SCORE)
}

/// Trunk +1 if twisted, capped at 6
pub fn adjust_trunk(trunk: i32, twisted: bool) -> i32 {
    bump(trunk, twisted, MAX_AXIAL_SCORE)
}

/// Upper arm +1 raised, +1 abducted (cap 6), -1 supported (floor 1)
pub fn adjust_arm(arm: i32, adjustments: &Adjustments) -> i32 {
    let mut score = bump(arm, adjustments.shoulder_raised, MAX_AXIAL_SCORE);
    score = bump(score, adjustments.arm_abducted, MAX_AXIAL_SCORE);
    if adjustments.arm_supported {
        score = score.saturating_sub(1).max(1);
    }
    score
}

/// Wrist +1 bent, +1 twisted, capped at 3
pub fn adjust_wrist(wrist: i32, adjustments: &Adjustments) -> i32 {
    let score = bump(wrist, adjustments.wrist_bent, MAX_WRIST_SCORE);
    bump(score, adjustments.wrist_twisted, MAX_WRIST_SCORE)
}

impl AdjustedScores {
    pub fn new(scores: &PostureScores, adjustments: &Adjustments) -> Self {
        AdjustedScores {
            neck: adjust_neck(scores.neck, adjustments.neck_twisted),
            trunk: adjust_trunk(scores.trunk, adjustments.trunk_twisted),
            legs: scores.legs,
            arm: adjust_arm(scores.arm, adjustments),
            forearm: scores.forearm,
            wrist: adjust_wrist(scores.wrist, adjustments),
        }
    }
}
