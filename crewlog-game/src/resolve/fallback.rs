//! Local suspicion heuristic used whenever the reasoning service is unavailable.
use crate::event::{EventKind, LogEntry};
use crate::resolve::wire::{Detail, RawHypothesis, SYSTEM_SPEAKER};
use crate::roster::PlayerPayload;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Note attached to synthesized details drawn as untruthful.
pub const CONFLICT_NOTE: &str = "与其他证词存在冲突 (本地模拟)";

/// Probability that a synthesized detail is drawn as truthful.
pub const TRUTH_PROBABILITY: f64 = 0.7;

pub const PRIMARY_COST: f64 = 0.0;
pub const ALTERNATE_COST: f64 = 20.0;

/// Per-kind score deltas applied to an event's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspicionWeights {
    pub accusation: i32,
    pub suspicion: i32,
    pub scan: i32,
    pub vouch: i32,
}

impl Default for SuspicionWeights {
    fn default() -> Self {
        Self {
            accusation: 20,
            suspicion: 8,
            scan: 100,
            vouch: 5,
        }
    }
}

impl SuspicionWeights {
    #[must_use]
    pub const fn delta(&self, kind: EventKind) -> i32 {
        match kind {
            EventKind::Accusation => self.accusation,
            EventKind::Suspicion => self.suspicion,
            EventKind::Scan => self.scan.saturating_neg(),
            EventKind::Vouch => self.vouch.saturating_neg(),
            EventKind::Sighting | EventKind::BodyReport | EventKind::System => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectScore {
    pub name: String,
    pub score: i32,
}

/// Score every roster member, highest first. Ties keep roster order.
#[must_use]
pub fn suspicion_scores(
    players: &[PlayerPayload],
    log: &[LogEntry],
    weights: &SuspicionWeights,
) -> Vec<SuspectScore> {
    let mut scores: Vec<SuspectScore> = players
        .iter()
        .map(|p| SuspectScore {
            name: p.name.clone(),
            score: 0,
        })
        .collect();

    for entry in log {
        let delta = weights.delta(entry.kind);
        if delta == 0 {
            continue;
        }
        let Some(target) = entry.target.as_deref() else {
            continue;
        };
        if let Some(slot) = scores.iter_mut().find(|s| s.name == target) {
            slot.score = slot.score.saturating_add(delta);
        }
    }

    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores
}

fn pick(names: &[&str], picks: [Option<usize>; 2]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(2);
    for name in picks.into_iter().flatten().filter_map(|idx| names.get(idx)) {
        if !out.iter().any(|existing| existing == name) {
            out.push((*name).to_string());
        }
    }
    out
}

fn event_details<R: Rng + ?Sized>(notice: String, log: &[LogEntry], rng: &mut R) -> Vec<Detail> {
    let mut details = vec![Detail::info(notice, true)];
    for entry in log.iter().filter(|e| e.kind != EventKind::System) {
        let is_truth = rng.gen_bool(TRUTH_PROBABILITY);
        details.push(Detail {
            speaker: entry
                .actor
                .clone()
                .unwrap_or_else(|| SYSTEM_SPEAKER.to_string()),
            role: entry.kind.tag().to_string(),
            content: entry.text.clone(),
            is_truth,
            contradiction: (!is_truth).then(|| CONFLICT_NOTE.to_string()),
        });
    }
    details
}

/// Two ranked guesses built from the suspicion scores.
///
/// Rank 1 pairs the top two scorers (or top and lowest); rank 2 pairs the top
/// scorer with the third (or second). Names missing from a small roster drop out.
pub fn fallback_hypotheses<R: Rng + ?Sized>(
    players: &[PlayerPayload],
    log: &[LogEntry],
    weights: &SuspicionWeights,
    rng: &mut R,
) -> Vec<RawHypothesis> {
    let scores = suspicion_scores(players, log, weights);
    let names: Vec<&str> = scores.iter().map(|s| s.name.as_str()).collect();
    let last = names.len().checked_sub(1);
    let second = (names.len() > 1).then_some(1);
    let third = (names.len() > 2).then_some(2);
    let top = names.first().copied().unwrap_or("?");

    let primary = pick(&names, [Some(0), second.or(last)]);
    let alternate = pick(&names, [Some(0), third.or(second)]);

    vec![
        RawHypothesis {
            rank: Some(1),
            impostors: primary,
            score: Some(PRIMARY_COST),
            details: Some(event_details(
                format!("检测到网络连接失败，已切换至本地模拟模式 ({top} 嫌疑指数最高)"),
                log,
                rng,
            )),
            reason: None,
        },
        RawHypothesis {
            rank: Some(2),
            impostors: alternate,
            score: Some(ALTERNATE_COST),
            details: Some(event_details(
                String::from("备选可能性分析 (本地模拟)，请检查后端 API 地址"),
                log,
                rng,
            )),
            reason: None,
        },
    ]
}
