//! Score composition - posture scores to final REBA score and risk level

use reba_exposure::ExposureField;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{table_a, table_b, table_c, AdjustedScores, Adjustments, PostureScores, RiskLevel, Table};

/// Highest force/load score
pub const MAX_FORCE_LOAD: u8 = 2;

/// Composition thresholds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Trunk/neck exposure (seconds) that counts as static holding
    pub activity_exposure_secs: f64,
    /// Trunk/neck movement rate (events/min) that counts as repetitive
    pub activity_frequency_per_min: f64,
    /// Trunk/neck movement rate (events/min) that adds to force/load
    pub force_frequency_per_min: f64,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        ComposerConfig {
            activity_exposure_secs: 60.0,
            activity_frequency_per_min: 4.0,
            force_frequency_per_min: 10.0,
        }
    }
}

/// Trunk and neck movement summary, for the activity and force factors
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxialActivity {
    /// Longest trunk/neck exposure in seconds
    pub exposure_secs: f64,
    /// Highest trunk/neck events per minute
    pub frequency_per_min: f64,
}

impl AxialActivity {
    pub fn from_field(field: &ExposureField) -> Self {
        AxialActivity {
            exposure_secs: field.axial_exposure_time(),
            frequency_per_min: field.axial_frequency(),
        }
    }
}

/// A condition that forced a substitute value into the score
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScoreDiagnostic {
    #[error("Table {table} lookup failed, substituted 0")]
    LookupFailed { table: Table },
}

/// Everything the composer produced for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub adjusted: AdjustedScores,
    pub posture_score_a: i32,
    pub posture_score_b: i32,
    pub table_c_score: i32,
    pub force_load_score: i32,
    pub coupling_score: i32,
    pub activity_score: i32,
    pub reba_score_final: i32,
    pub risk: RiskLevel,
    pub diagnostics: Vec<ScoreDiagnostic>,
}

/// Combines posture scores and adjustment factors into the final score
#[derive(Debug, Clone, Default)]
pub struct ScoreComposer {
    config: ComposerConfig,
}

impl ScoreComposer {
    pub fn new() -> Self {
        Self::with_config(ComposerConfig::default())
    }

    pub fn with_config(config: ComposerConfig) -> Self {
        ScoreComposer { config }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Force/load: base plus one for rapid trunk/neck movement, capped at 2
    pub fn force_load_score(&self, base: u8, activity: &AxialActivity) -> i32 {
        let mut score = base.min(MAX_FORCE_LOAD) as i32;
        if activity.frequency_per_min > self.config.force_frequency_per_min {
            score += 1;
        }
        score.min(MAX_FORCE_LOAD as i32)
    }

    /// Coupling: poor (2) when the wrist is bent or twisted, good (0) otherwise
    pub fn coupling_score(&self, adjustments: &Adjustments) -> i32 {
        if adjustments.wrist_bent || adjustments.wrist_twisted {
            2
        } else {
            0
        }
    }

    /// Activity: static holding or repetitive trunk/neck movement
    pub fn activity_score(&self, activity: &AxialActivity) -> i32 {
        let held = activity.exposure_secs > self.config.activity_exposure_secs;
        let repeated = activity.frequency_per_min > self.config.activity_frequency_per_min;
        if held || repeated {
            1
        } else {
            0
        }
    }

    /// Run the full worksheet
    pub fn compose(
        &self,
        scores: &PostureScores,
        adjustments: &Adjustments,
        force_load_base: u8,
        activity: &AxialActivity,
    ) -> ScoreBreakdown {
        let mut diagnostics = Vec::new();
        let adjusted = AdjustedScores::new(scores, adjustments);

        let posture_score_a = guarded(
            Table::A,
            table_a(adjusted.legs, adjusted.trunk, adjusted.neck),
            &mut diagnostics,
        );
        let posture_score_b = guarded(
            Table::B,
            table_b(adjusted.wrist, adjusted.arm, adjusted.forearm),
            &mut diagnostics,
        );
        let table_c_score = guarded(
            Table::C,
            table_c(posture_score_a, posture_score_b),
            &mut diagnostics,
        );

        let force_load_score = self.force_load_score(force_load_base, activity);
        let coupling_score = self.coupling_score(adjustments);
        let activity_score = self.activity_score(activity);

        let reba_score_final = table_c_score + force_load_score + coupling_score + activity_score;
        let risk = RiskLevel::from_score(reba_score_final);

        ScoreBreakdown {
            adjusted,
            posture_score_a,
            posture_score_b,
            table_c_score,
            force_load_score,
            coupling_score,
            activity_score,
            reba_score_final,
            risk,
            diagnostics,
        }
    }

    /// Compose directly from an exposure field and this frame's adjustments
    pub fn compose_field(
        &self,
        field: &ExposureField,
        adjustments: &Adjustments,
        force_load_base: u8,
    ) -> ScoreBreakdown {
        self.compose(
            &PostureScores::from_field(field),
            adjustments,
            force_load_base,
            &AxialActivity::from_field(field),
        )
    }
}

/// Substitute 0 for a failed lookup and record why
fn guarded(table: Table, value: Option<u8>, diagnostics: &mut Vec<ScoreDiagnostic>) -> i32 {
    match value {
        Some(v) => v as i32,
        None => {
            let diagnostic = ScoreDiagnostic::LookupFailed { table };
            tracing::warn!(%table, "{}", diagnostic);
            diagnostics.push(diagnostic);
            0
        }
    }
}
