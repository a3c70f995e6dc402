//! Segment exposure - time spent per REBA range for one body segment

use reba_pose::LegPosture;
use serde::{Deserialize, Serialize};

use crate::{BinSpec, BodySegment};

/// Exposure model configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureConfig {
    /// Angle change (degrees) that counts as a movement event
    pub significant_change_degrees: f64,
}

impl Default for ExposureConfig {
    fn default() -> Self {
        ExposureConfig {
            significant_change_degrees: 5.0,
        }
    }
}

/// One frame's reading for a segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Representative angle in degrees
    pub angle: f64,
    /// Leg support, only read by the legs segment
    pub legs: LegPosture,
}

impl Reading {
    pub fn angle(angle: f64) -> Self {
        Reading {
            angle,
            legs: LegPosture::Bilateral,
        }
    }

    pub fn legs(angle: f64, legs: LegPosture) -> Self {
        Reading { angle, legs }
    }
}

/// Exposure state of one body segment
///
/// INVARIANT: `score` is always the table score of the first bin holding the
/// most accumulated time. Bins are fixed by the segment's range table.
#[derive(Debug, Clone)]
pub struct SegmentExposure {
    segment: BodySegment,
    /// Last known absolute angle, `None` while undetected
    angle: Option<f64>,
    /// Total seconds observed
    exposure_time: f64,
    /// Significant angle changes observed
    event_count: u32,
    /// Session time (seconds) of the last significant change
    last_change_time: f64,
    /// Events per minute of exposure
    frequency: f64,
    /// Seconds per bin, aligned with `segment.bins()`
    bins: Vec<f64>,
    score: u8,
    significant_change: f64,
}

impl SegmentExposure {
    pub fn new(segment: BodySegment) -> Self {
        Self::with_config(segment, &ExposureConfig::default())
    }

    pub fn with_config(segment: BodySegment, config: &ExposureConfig) -> Self {
        let bins = vec![0.0; segment.bins().len()];
        let score = segment.bins().first().map(|b| b.score).unwrap_or(1);
        SegmentExposure {
            segment,
            angle: None,
            exposure_time: 0.0,
            event_count: 0,
            last_change_time: 0.0,
            frequency: 0.0,
            bins,
            score,
            significant_change: config.significant_change_degrees,
        }
    }

    /// Fold one frame into the exposure model.
    ///
    /// A missing reading freezes the angle and leaves time untouched, but the
    /// score is still re-derived from the existing bins.
    pub fn advance(&mut self, reading: Option<Reading>, elapsed_secs: f64, now: f64) {
        let Some(reading) = reading else {
            self.angle = None;
            self.refresh_score();
            return;
        };

        let elapsed = if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            elapsed_secs
        } else {
            0.0
        };
        let angle = reading.angle.abs();

        let previous = self.angle.unwrap_or(0.0);
        if (angle - previous).abs() > self.significant_change {
            self.event_count += 1;
            self.last_change_time = now;
        }

        self.exposure_time += elapsed;
        match self.segment.classify(angle, reading.legs) {
            Some(idx) => self.bins[idx] += elapsed,
            None => {
                tracing::error!(segment = %self.segment, angle, "reading matched no exposure bin");
            }
        }

        self.frequency = if self.exposure_time > 0.0 {
            self.event_count as f64 / (self.exposure_time / 60.0)
        } else {
            0.0
        };
        self.angle = Some(angle);
        self.refresh_score();
    }

    fn refresh_score(&mut self) {
        let bins = self.segment.bins();
        let score = bins[self.dominant_bin()].score;
        if score != self.score {
            tracing::debug!(
                segment = %self.segment,
                from = self.score,
                to = score,
                "dominant posture changed"
            );
        }
        self.score = score;
    }

    /// Index of the first bin holding the most time
    pub fn dominant_bin(&self) -> usize {
        let mut best = 0;
        for (idx, &secs) in self.bins.iter().enumerate() {
            if secs > self.bins[best] {
                best = idx;
            }
        }
        best
    }

    /// Range table entry of the dominant bin
    pub fn dominant_spec(&self) -> &'static BinSpec {
        &self.segment.bins()[self.dominant_bin()]
    }

    /// Return to the neutral state
    pub fn reset(&mut self) {
        let significant_change = self.significant_change;
        *self = SegmentExposure::with_config(
            self.segment,
            &ExposureConfig {
                significant_change_degrees: significant_change,
            },
        );
    }

    pub fn segment(&self) -> BodySegment {
        self.segment
    }

    pub fn angle(&self) -> Option<f64> {
        self.angle
    }

    pub fn exposure_time(&self) -> f64 {
        self.exposure_time
    }

    pub fn event_count(&self) -> u32 {
        self.event_count
    }

    pub fn last_change_time(&self) -> f64 {
        self.last_change_time
    }

    /// Significant changes per minute
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Current posture sub-score
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Seconds accumulated in a bin. Unknown labels return `None`.
    pub fn bin_time(&self, label: &str) -> Option<f64> {
        self.segment.bin_index(label).map(|idx| self.bins[idx])
    }

    /// Fraction of exposure time spent in a bin
    pub fn bin_share(&self, label: &str) -> Option<f64> {
        let secs = self.bin_time(label)?;
        if self.exposure_time > 0.0 {
            Some(secs / self.exposure_time)
        } else {
            Some(0.0)
        }
    }

    /// (label, seconds) for every bin, in table order
    pub fn exposure_time_bins(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.segment
            .bins()
            .iter()
            .zip(self.bins.iter())
            .map(|(spec, &secs)| (spec.label, secs))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const DT: f64 = 1.0 / 30.0;

    #[test]
    fn test_initial_state_is_neutral() {
        for &segment in BodySegment::all() {
            let exposure = SegmentExposure::new(segment);
            assert_eq!(exposure.angle(), None);
            assert_eq!(exposure.exposure_time(), 0.0);
            assert_eq!(exposure.dominant_bin(), 0);
            assert_eq!(exposure.score(), segment.bins()[0].score);
            assert_eq!(exposure.exposure_time_bins().count(), segment.bins().len());
        }
    }

    #[test]
    fn test_identical_angle_fills_one_bin() {
        let mut neck = SegmentExposure::new(BodySegment::Neck);
        let frames = 90;
        for i in 0..frames {
            neck.advance(Some(Reading::angle(35.0)), DT, i as f64 * DT);
        }

        let expected = frames as f64 * DT;
        assert!((neck.bin_time("21+").unwrap() - expected).abs() < 1e-9);
        assert_eq!(neck.bin_time("0-20"), Some(0.0));
        assert!((neck.exposure_time() - expected).abs() < 1e-9);
        assert_eq!(neck.score(), 2);
        assert_eq!(neck.event_count(), 1);
    }

    #[test]
    fn test_score_follows_longest_held_bin() {
        let mut trunk = SegmentExposure::new(BodySegment::Trunk);

        trunk.advance(Some(Reading::angle(5.0)), 10.0, 10.0);
        trunk.advance(Some(Reading::angle(70.0)), 4.0, 14.0);
        // Currently bent, but upright held longer
        assert_eq!(trunk.score(), 1);

        trunk.advance(Some(Reading::angle(70.0)), 7.0, 21.0);
        assert_eq!(trunk.score(), 4);
        assert_eq!(trunk.dominant_spec().label, "61+");
    }

    #[test]
    fn test_ties_keep_first_maximum() {
        let mut wrist = SegmentExposure::new(BodySegment::Wrist);
        wrist.advance(Some(Reading::angle(40.0)), 2.0, 2.0);
        wrist.advance(Some(Reading::angle(0.0)), 2.0, 4.0);

        assert_eq!(wrist.dominant_bin(), 0);
        assert_eq!(wrist.score(), 1);
    }

    #[test]
    fn test_missing_reading_keeps_history() {
        let mut arm = SegmentExposure::new(BodySegment::Arm);
        arm.advance(Some(Reading::angle(50.0)), 3.0, 3.0);
        assert_eq!(arm.score(), 3);

        arm.advance(None, 5.0, 8.0);
        assert_eq!(arm.angle(), None);
        assert_eq!(arm.exposure_time(), 3.0);
        assert_eq!(arm.bin_time("46-90"), Some(3.0));
        assert_eq!(arm.score(), 3);
    }

    #[test]
    fn test_events_and_frequency() {
        let mut neck = SegmentExposure::new(BodySegment::Neck);
        neck.advance(Some(Reading::angle(0.0)), 15.0, 15.0);
        assert_eq!(neck.event_count(), 0);

        neck.advance(Some(Reading::angle(10.0)), 15.0, 30.0);
        neck.advance(Some(Reading::angle(12.0)), 15.0, 45.0);
        neck.advance(Some(Reading::angle(-30.0)), 15.0, 60.0);

        assert_eq!(neck.event_count(), 2);
        assert_eq!(neck.last_change_time(), 60.0);
        assert_eq!(neck.angle(), Some(30.0));
        // 2 events over one minute
        assert!((neck.frequency() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_legs_use_posture() {
        let mut legs = SegmentExposure::new(BodySegment::Legs);
        legs.advance(Some(Reading::legs(3.0, LegPosture::Unilateral)), 2.0, 2.0);
        legs.advance(Some(Reading::legs(3.0, LegPosture::Bilateral)), 1.0, 3.0);

        assert_eq!(legs.bin_time("unilateral"), Some(2.0));
        assert_eq!(legs.bin_time("bilateral"), Some(1.0));
        assert_eq!(legs.score(), 2);
    }

    #[test]
    fn test_bin_share_and_unknown_labels() {
        let mut wrist = SegmentExposure::new(BodySegment::Wrist);
        assert_eq!(wrist.bin_share("0-15"), Some(0.0));

        wrist.advance(Some(Reading::angle(5.0)), 3.0, 3.0);
        wrist.advance(Some(Reading::angle(25.0)), 1.0, 4.0);

        assert!((wrist.bin_share("0-15").unwrap() - 0.75).abs() < 1e-9);
        assert_eq!(wrist.bin_share("bilateral"), None);
        assert_eq!(wrist.bin_time("90+"), None);
    }

    #[test]
    fn test_reset() {
        let mut forearm = SegmentExposure::new(BodySegment::Forearm);
        forearm.advance(Some(Reading::angle(80.0)), 5.0, 5.0);
        assert_eq!(forearm.score(), 1);

        forearm.reset();
        assert_eq!(forearm.exposure_time(), 0.0);
        assert_eq!(forearm.event_count(), 0);
        assert_eq!(forearm.score(), 2);
    }

    #[test]
    fn test_invalid_elapsed_is_ignored() {
        let mut trunk = SegmentExposure::new(BodySegment::Trunk);
        trunk.advance(Some(Reading::angle(30.0)), -4.0, 0.0);
        trunk.advance(Some(Reading::angle(30.0)), f64::NAN, 0.0);

        assert_eq!(trunk.exposure_time(), 0.0);
        assert_eq!(trunk.bin_time("21-60"), Some(0.0));
        assert_eq!(trunk.frequency(), 0.0);
    }

    fn reading_strategy() -> impl Strategy<Value = Option<Reading>> {
        prop_oneof![
            1 => Just(None),
            4 => (-180.0f64..180.0, any::<bool>()).prop_map(|(angle, one_leg)| {
                let legs = if one_leg { LegPosture::Unilateral } else { LegPosture::Bilateral };
                Some(Reading::legs(angle, legs))
            }),
        ]
    }

    fn segment_strategy() -> impl Strategy<Value = BodySegment> {
        (0..BodySegment::count()).prop_map(|i| BodySegment::all()[i])
    }

    proptest! {
        #[test]
        fn prop_score_matches_first_maximum_bin(
            segment in segment_strategy(),
            steps in prop::collection::vec((reading_strategy(), 0.0f64..2.0), 1..60),
        ) {
            let mut exposure = SegmentExposure::new(segment);
            let mut now = 0.0;
            for (reading, dt) in steps {
                now += dt;
                exposure.advance(reading, dt, now);

                let bins: Vec<f64> = exposure.exposure_time_bins().map(|(_, s)| s).collect();
                let mut best = 0;
                for (i, &s) in bins.iter().enumerate() {
                    if s > bins[best] {
                        best = i;
                    }
                }
                prop_assert_eq!(exposure.score(), segment.bins()[best].score);

                let total: f64 = bins.iter().sum();
                prop_assert!(total <= exposure.exposure_time() + 1e-9);
            }
        }

        #[test]
        fn prop_zero_elapsed_is_idempotent(
            segment in segment_strategy(),
            warmup in prop::collection::vec((reading_strategy(), 0.0f64..2.0), 0..20),
            reading in reading_strategy(),
        ) {
            let mut exposure = SegmentExposure::new(segment);
            for (r, dt) in warmup {
                exposure.advance(r, dt, 0.0);
            }

            let bins_before: Vec<f64> = exposure.exposure_time_bins().map(|(_, s)| s).collect();
            let time_before = exposure.exposure_time();
            let score_before = exposure.score();

            exposure.advance(reading, 0.0, 100.0);

            let bins_after: Vec<f64> = exposure.exposure_time_bins().map(|(_, s)| s).collect();
            prop_assert_eq!(bins_before, bins_after);
            prop_assert_eq!(time_before, exposure.exposure_time());
            prop_assert_eq!(score_before, exposure.score());
        }

        #[test]
        fn prop_exposure_is_monotonic(
            segment in segment_strategy(),
            steps in prop::collection::vec((reading_strategy(), 0.0f64..2.0), 1..60),
        ) {
            let mut exposure = SegmentExposure::new(segment);
            let mut prev_bins: Vec<f64> = exposure.exposure_time_bins().map(|(_, s)| s).collect();
            let mut prev_time = exposure.exposure_time();

            for (reading, dt) in steps {
                exposure.advance(reading, dt, 0.0);
                let bins: Vec<f64> = exposure.exposure_time_bins().map(|(_, s)| s).collect();

                prop_assert!(exposure.exposure_time() >= prev_time);
                for (before, after) in prev_bins.iter().zip(bins.iter()) {
                    prop_assert!(after >= before);
                }
                prev_time = exposure.exposure_time();
                prev_bins = bins;
            }
        }
    }
}
