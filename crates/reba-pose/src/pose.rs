//! Pose Analysis - joint angles and posture flags from one frame
//!
//! This is NOT pose estimation. Landmarks arrive from an external detector;
//! this module only measures them.

use reba_core::{LandmarkFrame, LandmarkIndex, Point, DEFAULT_VISIBILITY_THRESHOLD};
use serde::{Deserialize, Serialize};

use crate::{interior_angle, pair_mean, segment_angle, Axis};

/// Geometry thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Minimum visibility for a landmark to count as detected
    pub visibility_threshold: f32,
    /// Normalized offset that counts as twisted or raised
    pub offset_threshold: f64,
    /// Upper-arm angle (degrees) beyond which the arm is abducted
    pub abduction_degrees: f64,
    /// Wrist angle (degrees) beyond which the wrist is bent or twisted
    pub wrist_deviation_degrees: f64,
    /// Elbow-to-shoulder distance under which the arm counts as supported
    pub support_distance: f64,
}

impl Default for PoseConfig {
    fn default() -> Self {
        PoseConfig {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            offset_threshold: 0.05,
            abduction_degrees: 20.0,
            wrist_deviation_degrees: 15.0,
            support_distance: 0.05,
        }
    }
}

impl PoseConfig {
    /// Configuration for detectors that report inflated visibility
    pub fn strict() -> Self {
        PoseConfig {
            visibility_threshold: 0.5,
            ..Self::default()
        }
    }
}

/// Body side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn both() -> [Side; 2] {
        [Side::Left, Side::Right]
    }

    pub fn shoulder(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftShoulder,
            Side::Right => LandmarkIndex::RightShoulder,
        }
    }

    pub fn elbow(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftElbow,
            Side::Right => LandmarkIndex::RightElbow,
        }
    }

    pub fn wrist(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftWrist,
            Side::Right => LandmarkIndex::RightWrist,
        }
    }

    pub fn index_finger(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftIndex,
            Side::Right => LandmarkIndex::RightIndex,
        }
    }

    pub fn hip(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftHip,
            Side::Right => LandmarkIndex::RightHip,
        }
    }

    pub fn knee(self) -> LandmarkIndex {
        match self {
            Side::Left => LandmarkIndex::LeftKnee,
            Side::Right => LandmarkIndex::RightKnee,
        }
    }
}

/// Per-frame joint angles in degrees. `None` when a required landmark is
/// missing or undetected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AngleSet {
    pub neck: Option<f64>,
    pub trunk: Option<f64>,
    pub left_elbow: Option<f64>,
    pub right_elbow: Option<f64>,
    pub left_upper_arm: Option<f64>,
    pub right_upper_arm: Option<f64>,
    pub left_forearm: Option<f64>,
    pub right_forearm: Option<f64>,
    pub left_wrist: Option<f64>,
    pub right_wrist: Option<f64>,
    pub left_leg: Option<f64>,
    pub right_leg: Option<f64>,
}

impl AngleSet {
    /// Representative upper-arm angle
    pub fn upper_arm(&self) -> Option<f64> {
        pair_mean(self.left_upper_arm, self.right_upper_arm)
    }

    /// Representative forearm angle
    pub fn forearm(&self) -> Option<f64> {
        pair_mean(self.left_forearm, self.right_forearm)
    }

    /// Representative wrist angle
    pub fn wrist(&self) -> Option<f64> {
        pair_mean(self.left_wrist, self.right_wrist)
    }

    /// Representative leg angle
    pub fn leg(&self) -> Option<f64> {
        pair_mean(self.left_leg, self.right_leg)
    }

    /// Number of angles present
    pub fn present_count(&self) -> usize {
        [
            self.neck,
            self.trunk,
            self.left_elbow,
            self.right_elbow,
            self.left_upper_arm,
            self.right_upper_arm,
            self.left_forearm,
            self.right_forearm,
            self.left_wrist,
            self.right_wrist,
            self.left_leg,
            self.right_leg,
        ]
        .iter()
        .filter(|a| a.is_some())
        .count()
    }
}

/// Leg support, approximated from knee/hip height ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegPosture {
    /// Weight on both legs, stable
    #[default]
    Bilateral,
    /// Weight on one leg or unstable
    Unilateral,
}

/// Binary posture flags. `None` when the inputs were insufficient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureFlags {
    pub neck_twisted: Option<bool>,
    pub trunk_twisted: Option<bool>,
    pub shoulder_raised: Option<bool>,
    pub arm_abducted: Option<bool>,
    pub arm_supported: Option<bool>,
    pub wrist_bent: Option<bool>,
    pub wrist_twisted: Option<bool>,
}

/// Everything measured from one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseObservation {
    pub angles: AngleSet,
    pub flags: PostureFlags,
    pub legs: LegPosture,
}

/// Stateless landmark geometry
#[derive(Debug, Clone, Default)]
pub struct PoseAnalyzer {
    config: PoseConfig,
}

impl PoseAnalyzer {
    pub fn new() -> Self {
        Self::with_config(PoseConfig::default())
    }

    pub fn with_config(config: PoseConfig) -> Self {
        PoseAnalyzer { config }
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    /// Measure one frame
    pub fn analyze(&self, frame: &LandmarkFrame) -> PoseObservation {
        let angles = self.angles(frame);
        let flags = self.flags(frame, &angles);
        let legs = self.leg_posture(frame);

        PoseObservation {
            angles,
            flags,
            legs,
        }
    }

    /// All joint angles of one frame
    pub fn angles(&self, frame: &LandmarkFrame) -> AngleSet {
        AngleSet {
            neck: self.neck_angle(frame),
            trunk: self.trunk_angle(frame),
            left_elbow: self.elbow_angle(frame, Side::Left),
            right_elbow: self.elbow_angle(frame, Side::Right),
            left_upper_arm: self.limb_angle(frame, Side::Left.shoulder(), Side::Left.elbow()),
            right_upper_arm: self.limb_angle(frame, Side::Right.shoulder(), Side::Right.elbow()),
            left_forearm: self.limb_angle(frame, Side::Left.elbow(), Side::Left.wrist()),
            right_forearm: self.limb_angle(frame, Side::Right.elbow(), Side::Right.wrist()),
            left_wrist: self.limb_angle(frame, Side::Left.wrist(), Side::Left.index_finger()),
            right_wrist: self.limb_angle(frame, Side::Right.wrist(), Side::Right.index_finger()),
            left_leg: self.limb_angle(frame, Side::Left.hip(), Side::Left.knee()),
            right_leg: self.limb_angle(frame, Side::Right.hip(), Side::Right.knee()),
        }
    }

    fn point(&self, frame: &LandmarkFrame, index: LandmarkIndex) -> Option<Point> {
        frame.point(index, self.config.visibility_threshold)
    }

    fn mid_shoulder(&self, frame: &LandmarkFrame) -> Option<Point> {
        let left = self.point(frame, LandmarkIndex::LeftShoulder)?;
        let right = self.point(frame, LandmarkIndex::RightShoulder)?;
        Some(left.midpoint(&right))
    }

    fn mid_hip(&self, frame: &LandmarkFrame) -> Option<Point> {
        let left = self.point(frame, LandmarkIndex::LeftHip)?;
        let right = self.point(frame, LandmarkIndex::RightHip)?;
        Some(left.midpoint(&right))
    }

    /// Head reference point for the neck angle.
    ///
    /// Prefers the more visible ear when both ears report a numeric
    /// visibility and at least one clears the threshold, then the nose,
    /// then the first detected of left ear, right ear, nose.
    pub fn head_reference(&self, frame: &LandmarkFrame) -> Option<Point> {
        let threshold = self.config.visibility_threshold;

        if let (Some(left), Some(right)) = (
            frame.get(LandmarkIndex::LeftEar),
            frame.get(LandmarkIndex::RightEar),
        ) {
            if let (Some(lv), Some(rv)) = (left.numeric_visibility(), right.numeric_visibility()) {
                if lv >= threshold || rv >= threshold {
                    let ear = if lv >= rv { left } else { right };
                    return Some(ear.point());
                }
            }
        }

        if let Some(nose) = self.point(frame, LandmarkIndex::Nose) {
            return Some(nose);
        }

        [
            LandmarkIndex::LeftEar,
            LandmarkIndex::RightEar,
            LandmarkIndex::Nose,
        ]
        .iter()
        .find_map(|&index| self.point(frame, index))
    }

    /// Neck flexion: mid-shoulder to head against "up"
    pub fn neck_angle(&self, frame: &LandmarkFrame) -> Option<f64> {
        let shoulders = self.mid_shoulder(frame)?;
        let head = self.head_reference(frame)?;
        Some(segment_angle(shoulders, head, Axis::Up))
    }

    /// Trunk flexion: mid-hip to mid-shoulder against "up"
    pub fn trunk_angle(&self, frame: &LandmarkFrame) -> Option<f64> {
        let shoulders = self.mid_shoulder(frame)?;
        let hips = self.mid_hip(frame)?;
        Some(segment_angle(hips, shoulders, Axis::Up))
    }

    /// Interior elbow angle (diagnostic only)
    pub fn elbow_angle(&self, frame: &LandmarkFrame, side: Side) -> Option<f64> {
        let shoulder = self.point(frame, side.shoulder())?;
        let elbow = self.point(frame, side.elbow())?;
        let wrist = self.point(frame, side.wrist())?;
        Some(interior_angle(shoulder, elbow, wrist))
    }

    /// Limb segment `from -> to` against "down"
    pub fn limb_angle(
        &self,
        frame: &LandmarkFrame,
        from: LandmarkIndex,
        to: LandmarkIndex,
    ) -> Option<f64> {
        let start = self.point(frame, from)?;
        let end = self.point(frame, to)?;
        Some(segment_angle(start, end, Axis::Down))
    }

    /// Unilateral when both knees sit below their hips, bilateral otherwise
    pub fn leg_posture(&self, frame: &LandmarkFrame) -> LegPosture {
        let knee_below_hip = |side: Side| -> bool {
            match (self.point(frame, side.hip()), self.point(frame, side.knee())) {
                (Some(hip), Some(knee)) => knee.y > hip.y,
                _ => false,
            }
        };

        if knee_below_hip(Side::Left) && knee_below_hip(Side::Right) {
            LegPosture::Unilateral
        } else {
            LegPosture::Bilateral
        }
    }

    /// Posture adjustment flags
    pub fn flags(&self, frame: &LandmarkFrame, angles: &AngleSet) -> PostureFlags {
        PostureFlags {
            neck_twisted: self.neck_twisted(frame),
            trunk_twisted: self.trunk_twisted(frame),
            shoulder_raised: self.shoulder_raised(frame),
            arm_abducted: any_above(
                [angles.left_upper_arm, angles.right_upper_arm],
                self.config.abduction_degrees,
            ),
            arm_supported: self.arm_supported(frame),
            wrist_bent: any_above(
                [angles.left_wrist, angles.right_wrist],
                self.config.wrist_deviation_degrees,
            ),
            wrist_twisted: angles
                .left_wrist
                .or(angles.right_wrist)
                .map(|a| a > self.config.wrist_deviation_degrees),
        }
    }

    fn neck_twisted(&self, frame: &LandmarkFrame) -> Option<bool> {
        let limit = self.config.offset_threshold;

        if let (Some(left), Some(right)) = (
            self.point(frame, LandmarkIndex::LeftEar),
            self.point(frame, LandmarkIndex::RightEar),
        ) {
            return Some((left.y - right.y).abs() > limit);
        }

        let nose = self.point(frame, LandmarkIndex::Nose)?;
        let shoulders = self.mid_shoulder(frame)?;
        Some((nose.x - shoulders.x).abs() > limit)
    }

    fn trunk_twisted(&self, frame: &LandmarkFrame) -> Option<bool> {
        let left = self.point(frame, LandmarkIndex::LeftShoulder)?;
        let right = self.point(frame, LandmarkIndex::RightShoulder)?;
        Some((left.y - right.y).abs() > self.config.offset_threshold)
    }

    fn shoulder_raised(&self, frame: &LandmarkFrame) -> Option<bool> {
        Side::both().iter().find_map(|&side| {
            let shoulder = self.point(frame, side.shoulder())?;
            let hip = self.point(frame, side.hip())?;
            Some(shoulder.y - hip.y > self.config.offset_threshold)
        })
    }

    fn arm_supported(&self, frame: &LandmarkFrame) -> Option<bool> {
        let distances: Vec<f64> = Side::both()
            .iter()
            .filter_map(|&side| {
                let shoulder = self.point(frame, side.shoulder())?;
                let elbow = self.point(frame, side.elbow())?;
                Some(elbow.distance(&shoulder))
            })
            .collect();

        if distances.is_empty() {
            return None;
        }
        Some(distances.iter().any(|&d| d < self.config.support_distance))
    }
}

fn any_above(angles: [Option<f64>; 2], limit: f64) -> Option<bool> {
    let present: Vec<f64> = angles.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().any(|&a| a > limit))
    }
}

#[cfg(test)]
mod tests {
    use reba_core::{FrameTime, Landmark};

    use super::*;

    /// Front-facing figure standing upright with arms hanging
    fn upright_frame() -> LandmarkFrame {
        let mut frame = LandmarkFrame::empty(FrameTime::ZERO);
        let points = [
            (LandmarkIndex::Nose, 0.50, 0.10),
            (LandmarkIndex::LeftEar, 0.47, 0.12),
            (LandmarkIndex::RightEar, 0.53, 0.12),
            (LandmarkIndex::LeftShoulder, 0.40, 0.30),
            (LandmarkIndex::RightShoulder, 0.60, 0.30),
            (LandmarkIndex::LeftElbow, 0.40, 0.45),
            (LandmarkIndex::RightElbow, 0.60, 0.45),
            (LandmarkIndex::LeftWrist, 0.40, 0.60),
            (LandmarkIndex::RightWrist, 0.60, 0.60),
            (LandmarkIndex::LeftIndex, 0.40, 0.65),
            (LandmarkIndex::RightIndex, 0.60, 0.65),
            (LandmarkIndex::LeftHip, 0.42, 0.60),
            (LandmarkIndex::RightHip, 0.58, 0.60),
            (LandmarkIndex::LeftKnee, 0.42, 0.80),
            (LandmarkIndex::RightKnee, 0.58, 0.80),
        ];
        for (index, x, y) in points {
            frame.set(index, Landmark::new(x, y, 0.9));
        }
        frame
    }

    #[test]
    fn test_upright_angles() {
        let analyzer = PoseAnalyzer::new();
        let angles = analyzer.angles(&upright_frame());

        assert!(angles.trunk.unwrap() < 1e-3);
        assert!(angles.neck.unwrap() < 20.0);
        assert!(angles.upper_arm().unwrap() < 1e-3);
        assert!(angles.forearm().unwrap() < 1e-3);
        assert!(angles.wrist().unwrap() < 1e-3);
        assert!(angles.leg().unwrap() < 1e-3);
        assert!((angles.left_elbow.unwrap() - 180.0).abs() < 1e-3);
        assert_eq!(angles.present_count(), 12);
    }

    #[test]
    fn test_upright_flags() {
        let analyzer = PoseAnalyzer::new();
        let obs = analyzer.analyze(&upright_frame());

        assert_eq!(obs.flags.neck_twisted, Some(false));
        assert_eq!(obs.flags.trunk_twisted, Some(false));
        assert_eq!(obs.flags.shoulder_raised, Some(false));
        assert_eq!(obs.flags.arm_abducted, Some(false));
        assert_eq!(obs.flags.arm_supported, Some(false));
        assert_eq!(obs.flags.wrist_bent, Some(false));
        assert_eq!(obs.flags.wrist_twisted, Some(false));
        // Knees below hips reads as unilateral
        assert_eq!(obs.legs, LegPosture::Unilateral);
    }

    #[test]
    fn test_raised_arm_is_abducted() {
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftElbow, Landmark::new(0.25, 0.30, 0.9));

        let analyzer = PoseAnalyzer::new();
        let obs = analyzer.analyze(&frame);

        assert!((obs.angles.left_upper_arm.unwrap() - 90.0).abs() < 1e-3);
        assert_eq!(obs.flags.arm_abducted, Some(true));
        // Mean of 90° and 0°
        assert!((obs.angles.upper_arm().unwrap() - 45.0).abs() < 1e-3);
    }

    #[test]
    fn test_missing_landmarks_yield_none() {
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftHip, Landmark::new(0.42, 0.60, 0.1));

        let analyzer = PoseAnalyzer::new();
        let obs = analyzer.analyze(&frame);

        assert_eq!(obs.angles.trunk, None);
        assert_eq!(obs.angles.left_leg, None);
        assert!(obs.angles.right_leg.is_some());
        assert!(obs.angles.neck.is_some());
        assert_eq!(obs.legs, LegPosture::Bilateral);
    }

    #[test]
    fn test_empty_frame() {
        let analyzer = PoseAnalyzer::new();
        let obs = analyzer.analyze(&LandmarkFrame::empty(FrameTime::ZERO));

        assert_eq!(obs.angles, AngleSet::default());
        assert_eq!(obs.flags, PostureFlags::default());
        assert_eq!(obs.legs, LegPosture::Bilateral);
    }

    #[test]
    fn test_head_reference_priority() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftEar, Landmark::new(0.47, 0.12, 0.4));
        frame.set(LandmarkIndex::RightEar, Landmark::new(0.53, 0.12, 0.8));

        let head = analyzer.head_reference(&frame).unwrap();
        assert!((head.x - 0.53).abs() < 1e-6);

        // Neither ear clears the threshold: nose wins
        frame.set(LandmarkIndex::LeftEar, Landmark::new(0.47, 0.12, 0.1));
        frame.set(LandmarkIndex::RightEar, Landmark::new(0.53, 0.12, 0.2));
        let head = analyzer.head_reference(&frame).unwrap();
        assert!((head.x - 0.50).abs() < 1e-6);

        // No nose, ears without visibility: left ear first
        frame.set(LandmarkIndex::Nose, Landmark::new(0.5, 0.1, 0.0));
        frame.set(LandmarkIndex::LeftEar, Landmark::without_visibility(0.46, 0.12));
        frame.set(LandmarkIndex::RightEar, Landmark::without_visibility(0.54, 0.12));
        let head = analyzer.head_reference(&frame).unwrap();
        assert!((head.x - 0.46).abs() < 1e-6);
    }

    #[test]
    fn test_neck_twist_falls_back_to_nose() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::RightEar, Landmark::new(0.53, 0.12, 0.0));
        frame.set(LandmarkIndex::Nose, Landmark::new(0.58, 0.10, 0.9));

        let flags = analyzer.analyze(&frame).flags;
        assert_eq!(flags.neck_twisted, Some(true));

        frame.set(LandmarkIndex::RightEar, Landmark::new(0.53, 0.20, 0.9));
        let flags = analyzer.analyze(&frame).flags;
        assert_eq!(flags.neck_twisted, Some(true));
    }

    #[test]
    fn test_trunk_twist_and_support() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftShoulder, Landmark::new(0.40, 0.38, 0.9));
        frame.set(LandmarkIndex::RightElbow, Landmark::new(0.61, 0.32, 0.9));

        let flags = analyzer.analyze(&frame).flags;
        assert_eq!(flags.trunk_twisted, Some(true));
        assert_eq!(flags.arm_supported, Some(true));
    }

    #[test]
    fn test_bent_wrist() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::RightIndex, Landmark::new(0.65, 0.65, 0.9));

        let flags = analyzer.analyze(&frame).flags;
        assert_eq!(flags.wrist_bent, Some(true));
        // Twist reads the left wrist first, which is straight
        assert_eq!(flags.wrist_twisted, Some(false));
    }

    #[test]
    fn test_shoulder_raised() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftShoulder, Landmark::new(0.40, 0.70, 0.9));

        assert_eq!(analyzer.analyze(&frame).flags.shoulder_raised, Some(true));
    }

    #[test]
    fn test_shoulder_raised_falls_back_to_right() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftHip, Landmark::new(0.42, 0.60, 0.1));
        frame.set(LandmarkIndex::RightShoulder, Landmark::new(0.60, 0.70, 0.9));
        assert_eq!(analyzer.analyze(&frame).flags.shoulder_raised, Some(true));

        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftShoulder, Landmark::new(0.40, 0.30, 0.1));
        assert_eq!(analyzer.analyze(&frame).flags.shoulder_raised, Some(false));

        // Left side decides when it is complete
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::RightShoulder, Landmark::new(0.60, 0.70, 0.9));
        assert_eq!(analyzer.analyze(&frame).flags.shoulder_raised, Some(false));

        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftHip, Landmark::new(0.42, 0.60, 0.1));
        frame.set(LandmarkIndex::RightHip, Landmark::new(0.58, 0.60, 0.1));
        assert_eq!(analyzer.analyze(&frame).flags.shoulder_raised, None);
    }

    #[test]
    fn test_wrist_twisted() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftIndex, Landmark::new(0.35, 0.65, 0.9));

        let flags = analyzer.analyze(&frame).flags;
        assert_eq!(flags.wrist_twisted, Some(true));
        assert_eq!(flags.wrist_bent, Some(true));
    }

    #[test]
    fn test_wrist_twisted_falls_back_to_right() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftIndex, Landmark::new(0.40, 0.65, 0.1));
        frame.set(LandmarkIndex::RightIndex, Landmark::new(0.65, 0.65, 0.9));

        let obs = analyzer.analyze(&frame);
        assert_eq!(obs.angles.left_wrist, None);
        assert_eq!(obs.flags.wrist_twisted, Some(true));

        frame.set(LandmarkIndex::RightIndex, Landmark::new(0.60, 0.65, 0.1));
        assert_eq!(analyzer.analyze(&frame).flags.wrist_twisted, None);
    }

    #[test]
    fn test_arm_supported_right_side_only() {
        let analyzer = PoseAnalyzer::new();
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftElbow, Landmark::new(0.40, 0.45, 0.1));
        assert_eq!(analyzer.analyze(&frame).flags.arm_supported, Some(false));

        frame.set(LandmarkIndex::RightElbow, Landmark::new(0.61, 0.32, 0.9));
        assert_eq!(analyzer.analyze(&frame).flags.arm_supported, Some(true));

        frame.set(LandmarkIndex::RightElbow, Landmark::new(0.61, 0.32, 0.1));
        assert_eq!(analyzer.analyze(&frame).flags.arm_supported, None);
    }

    #[test]
    fn test_strict_config_rejects_faint_points() {
        let mut frame = upright_frame();
        frame.set(LandmarkIndex::LeftShoulder, Landmark::new(0.40, 0.30, 0.4));

        assert!(PoseAnalyzer::new().trunk_angle(&frame).is_some());
        assert!(PoseAnalyzer::with_config(PoseConfig::strict())
            .trunk_angle(&frame)
            .is_none());
    }
}
