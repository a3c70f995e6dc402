//! REBA Session - frame-by-frame scoring loop

use reba_core::{FrameTime, LandmarkFrame, RebaError, RebaResult};
use reba_exposure::{BodySegment, ExposureField, SegmentExposure};
use reba_pose::{PoseAnalyzer, PoseObservation};
use reba_score::{Adjustments, ScoreBreakdown, ScoreComposer, MAX_FORCE_LOAD};
use serde::Serialize;

use crate::{SessionConfig, SessionSnapshot};

/// Session counters
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SessionStats {
    /// Frames processed
    pub frames: u64,
    /// Frames in which no angle could be measured
    pub frames_without_pose: u64,
    /// Frames whose timestamp went backwards
    pub backwards_timestamps: u64,
    /// Table lookups that had to be substituted
    pub lookup_failures: u64,
}

/// One analysis session over one stream of frames
pub struct RebaSession {
    config: SessionConfig,
    analyzer: PoseAnalyzer,
    composer: ScoreComposer,
    field: ExposureField,
    force_load_base: u8,
    /// Timestamp of the previous frame
    last_timestamp: Option<FrameTime>,
    /// Seconds of session time folded so far
    clock: f64,
    observation: PoseObservation,
    adjustments: Adjustments,
    breakdown: ScoreBreakdown,
    stats: SessionStats,
}

impl Default for RebaSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RebaSession {
    /// Create a session with default configuration
    pub fn new() -> Self {
        Self::build(SessionConfig::default())
    }

    /// Create a session with custom configuration
    pub fn with_config(config: SessionConfig) -> RebaResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SessionConfig) -> Self {
        let analyzer = PoseAnalyzer::with_config(config.pose.clone());
        let composer = ScoreComposer::with_config(config.composer.clone());
        let field = ExposureField::with_config(&config.exposure);
        let adjustments = Adjustments::default();
        let breakdown = composer.compose_field(&field, &adjustments, config.force_load_base);

        RebaSession {
            force_load_base: config.force_load_base,
            config,
            analyzer,
            composer,
            field,
            last_timestamp: None,
            clock: 0.0,
            observation: PoseObservation::default(),
            adjustments,
            breakdown,
            stats: SessionStats::default(),
        }
    }

    /// Process a frame, deriving elapsed time from its timestamp.
    ///
    /// The first frame contributes no time. A timestamp earlier than the
    /// previous one contributes no time either.
    pub fn process_frame(&mut self, frame: &LandmarkFrame) -> &ScoreBreakdown {
        let elapsed = match self.last_timestamp {
            None => 0.0,
            Some(previous) => match frame.timestamp.secs_since(previous) {
                Some(secs) => secs,
                None => {
                    self.stats.backwards_timestamps += 1;
                    tracing::warn!(
                        previous = ?previous,
                        current = ?frame.timestamp,
                        "frame timestamp went backwards, treating as zero elapsed"
                    );
                    0.0
                }
            },
        };

        if self.last_timestamp.map_or(true, |previous| frame.timestamp > previous) {
            self.last_timestamp = Some(frame.timestamp);
        }

        self.advance(frame, elapsed)
    }

    /// Process a frame with caller-supplied elapsed seconds
    pub fn advance(&mut self, frame: &LandmarkFrame, elapsed_secs: f64) -> &ScoreBreakdown {
        let elapsed = if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            elapsed_secs
        } else {
            0.0
        };
        self.clock += elapsed;

        // Stage 1: geometry
        let observation = self.analyzer.analyze(frame);
        if observation.angles.present_count() == 0 {
            self.stats.frames_without_pose += 1;
        }

        // Stage 2: exposure
        self.field.advance(&observation, elapsed, self.clock);

        // Stage 3: tables and composition
        self.adjustments = Adjustments::from(&observation.flags);
        self.breakdown =
            self.composer
                .compose_field(&self.field, &self.adjustments, self.force_load_base);

        self.observation = observation;
        self.stats.frames += 1;
        self.stats.lookup_failures += self.breakdown.diagnostics.len() as u64;

        tracing::debug!(
            frame = self.stats.frames,
            clock = self.clock,
            score_a = self.breakdown.posture_score_a,
            score_b = self.breakdown.posture_score_b,
            score_c = self.breakdown.table_c_score,
            final_score = self.breakdown.reba_score_final,
            risk = %self.breakdown.risk,
            "frame scored"
        );

        &self.breakdown
    }

    /// Change the user-supplied force/load base score
    pub fn set_force_load(&mut self, base: u8) -> RebaResult<()> {
        if base > MAX_FORCE_LOAD {
            return Err(RebaError::InvalidForceLoad(base));
        }
        if base != self.force_load_base {
            tracing::info!(from = self.force_load_base, to = base, "force/load base changed");
        }
        self.force_load_base = base;
        self.breakdown = self
            .composer
            .compose_field(&self.field, &self.adjustments, self.force_load_base);
        Ok(())
    }

    /// Start over for a new video. Configuration and force/load are kept.
    pub fn reset(&mut self) {
        tracing::info!(frames = self.stats.frames, clock = self.clock, "session reset");

        self.field.reset();
        self.last_timestamp = None;
        self.clock = 0.0;
        self.observation = PoseObservation::default();
        self.adjustments = Adjustments::default();
        self.stats = SessionStats::default();
        self.breakdown = self
            .composer
            .compose_field(&self.field, &self.adjustments, self.force_load_base);
    }

    /// Point-in-time view of the whole session
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn force_load_base(&self) -> u8 {
        self.force_load_base
    }

    /// Seconds of session time folded so far
    pub fn elapsed_secs(&self) -> f64 {
        self.clock
    }

    pub fn field(&self) -> &ExposureField {
        &self.field
    }

    pub fn segment(&self, segment: BodySegment) -> &SegmentExposure {
        self.field.get(segment)
    }

    /// Measurements of the latest frame
    pub fn observation(&self) -> &PoseObservation {
        &self.observation
    }

    /// Resolved posture flags of the latest frame
    pub fn adjustments(&self) -> &Adjustments {
        &self.adjustments
    }

    /// Latest score breakdown
    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
