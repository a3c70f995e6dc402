//! Exposure field - the six tracked segments of one analysis session

use reba_pose::PoseObservation;

use crate::{BodySegment, ExposureConfig, Reading, SegmentExposure};

/// Exposure state for every tracked body segment
#[derive(Debug, Clone)]
pub struct ExposureField {
    /// Indexed by `BodySegment as usize`
    segments: Vec<SegmentExposure>,
}

impl Default for ExposureField {
    fn default() -> Self {
        Self::new()
    }
}

impl ExposureField {
    pub fn new() -> Self {
        Self::with_config(&ExposureConfig::default())
    }

    pub fn with_config(config: &ExposureConfig) -> Self {
        ExposureField {
            segments: BodySegment::all()
                .iter()
                .map(|&segment| SegmentExposure::with_config(segment, config))
                .collect(),
        }
    }

    /// Get a segment by identity
    pub fn get(&self, segment: BodySegment) -> &SegmentExposure {
        &self.segments[segment as usize]
    }

    /// Advance a single segment
    pub fn advance_segment(
        &mut self,
        segment: BodySegment,
        reading: Option<Reading>,
        elapsed_secs: f64,
        now: f64,
    ) {
        self.segments[segment as usize].advance(reading, elapsed_secs, now);
    }

    /// Fold one frame's measurements into every segment
    pub fn advance(&mut self, observation: &PoseObservation, elapsed_secs: f64, now: f64) {
        let angles = &observation.angles;

        for &segment in BodySegment::all() {
            let reading = match segment {
                BodySegment::Trunk => angles.trunk.map(Reading::angle),
                BodySegment::Neck => angles.neck.map(Reading::angle),
                BodySegment::Legs => angles
                    .leg()
                    .map(|angle| Reading::legs(angle, observation.legs)),
                BodySegment::Arm => angles.upper_arm().map(Reading::angle),
                BodySegment::Forearm => angles.forearm().map(Reading::angle),
                BodySegment::Wrist => angles.wrist().map(Reading::angle),
            };
            self.advance_segment(segment, reading, elapsed_secs, now);
        }
    }

    /// Reset every segment to neutral
    pub fn reset(&mut self) {
        for segment in &mut self.segments {
            segment.reset();
        }
    }

    /// Iterate over all segments in order
    pub fn iter(&self) -> impl Iterator<Item = &SegmentExposure> {
        self.segments.iter()
    }

    /// Longest exposure across trunk and neck
    pub fn axial_exposure_time(&self) -> f64 {
        self.get(BodySegment::Trunk)
            .exposure_time()
            .max(self.get(BodySegment::Neck).exposure_time())
    }

    /// Highest movement frequency across trunk and neck
    pub fn axial_frequency(&self) -> f64 {
        self.get(BodySegment::Trunk)
            .frequency()
            .max(self.get(BodySegment::Neck).frequency())
    }
}
