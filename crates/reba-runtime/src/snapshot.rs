//! Session snapshot - serializable view of a session

use reba_exposure::SegmentExposure;
use reba_pose::{AngleSet, LegPosture, PostureFlags};
use reba_score::{Adjustments, RiskLevel, ScoreBreakdown};
use serde::Serialize;

use crate::{RebaSession, SessionStats};

/// Seconds held in one angle range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinReport {
    pub label: String,
    pub seconds: f64,
}

/// Exposure state of one segment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentReport {
    pub segment: String,
    pub angle: Option<f64>,
    pub exposure_time: f64,
    pub event_count: u32,
    pub last_change_time: f64,
    pub frequency: f64,
    pub score: u8,
    pub bins: Vec<BinReport>,
}

impl From<&SegmentExposure> for SegmentReport {
    fn from(exposure: &SegmentExposure) -> Self {
        SegmentReport {
            segment: exposure.segment().name().to_string(),
            angle: exposure.angle(),
            exposure_time: exposure.exposure_time(),
            event_count: exposure.event_count(),
            last_change_time: exposure.last_change_time(),
            frequency: exposure.frequency(),
            score: exposure.score(),
            bins: exposure
                .exposure_time_bins()
                .map(|(label, seconds)| BinReport {
                    label: label.to_string(),
                    seconds,
                })
                .collect(),
        }
    }
}

/// Everything a caller needs to display or persist the session state
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub elapsed_secs: f64,
    pub force_load_base: u8,
    pub angles: AngleSet,
    /// Flags as measured, `None` where undetermined
    pub flags: PostureFlags,
    pub legs: LegPosture,
    /// Flags as applied to the scores
    pub adjustments: Adjustments,
    pub segments: Vec<SegmentReport>,
    pub scores: ScoreBreakdown,
    pub risk: RiskLevel,
    pub risk_label: &'static str,
    pub stats: SessionStats,
}

impl SessionSnapshot {
    pub fn capture(session: &RebaSession) -> Self {
        let scores = session.breakdown().clone();
        SessionSnapshot {
            elapsed_secs: session.elapsed_secs(),
            force_load_base: session.force_load_base(),
            angles: session.observation().angles,
            flags: session.observation().flags,
            legs: session.observation().legs,
            adjustments: *session.adjustments(),
            segments: session.field().iter().map(SegmentReport::from).collect(),
            risk: scores.risk,
            risk_label: scores.risk.label(),
            scores,
            stats: session.stats().clone(),
        }
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to serialize snapshot");
            String::from("{}")
        })
    }
}
