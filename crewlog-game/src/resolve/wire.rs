//! Request and response records exchanged with the reasoning service.
use crate::event::LogEntry;
use crate::roster::PlayerPayload;
use serde::{Deserialize, Serialize};

/// Body of the single POST sent per resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRequest {
    pub players: Vec<PlayerPayload>,
    pub logs: Vec<LogEntry>,
    pub impostor_count: u8,
}

fn default_speaker() -> String {
    String::from(SYSTEM_SPEAKER)
}

fn default_role() -> String {
    String::from(INFO_ROLE)
}

const fn default_truth() -> bool {
    true
}

pub const SYSTEM_SPEAKER: &str = "system";
pub const INFO_ROLE: &str = "info";

/// One narrative line supporting a hypothesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default = "default_speaker")]
    pub speaker: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, alias = "text")]
    pub content: String,
    #[serde(
        rename = "isTruth",
        alias = "is_truth",
        alias = "truth",
        default = "default_truth"
    )]
    pub is_truth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contradiction: Option<String>,
}

impl Detail {
    /// Generic `system/info` line.
    #[must_use]
    pub fn info(content: impl Into<String>, is_truth: bool) -> Self {
        Self {
            speaker: default_speaker(),
            role: default_role(),
            content: content.into(),
            is_truth,
            contradiction: None,
        }
    }
}

/// Hypothesis as returned by the service, in either protocol generation.
///
/// Newer responses carry `score` and `details`; older ones only `reason`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawHypothesis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default)]
    pub impostors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<Detail>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Vec<String>>,
}

/// Supporting narrative, discriminated by which field the service filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    Details(Vec<Detail>),
    Reasons(Vec<String>),
    Missing,
}

impl RawHypothesis {
    /// Move the narrative out. `details` wins when both shapes are present.
    pub fn take_evidence(&mut self) -> Evidence {
        match (self.details.take(), self.reason.take()) {
            (Some(details), _) => Evidence::Details(details),
            (None, Some(reasons)) => Evidence::Reasons(reasons),
            (None, None) => Evidence::Missing,
        }
    }
}
