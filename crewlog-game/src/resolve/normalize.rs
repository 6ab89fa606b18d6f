//! Turn raw service or fallback output into display-ready hypotheses.
use crate::resolve::wire::{Detail, Evidence, RawHypothesis};
use crate::text::to_simplified;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Cost synthesized per rank step when a hypothesis carries no score.
pub const RANK_COST_STEP: f64 = 10.0;

/// Substrings that mark a reason as a lie.
pub const LIE_MARKERS: [&str; 2] = ["撒谎", "❌"];

/// A normalized suspect combination, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub rank: u32,
    pub impostors: SmallVec<[String; 3]>,
    /// Effective cost; lower is more plausible.
    pub cost: f64,
    /// Relative likelihood within the batch, in percent.
    pub weight: f64,
    pub details: Vec<Detail>,
}

/// Raw score if usable, otherwise `(rank - 1) * 10`. Never negative.
#[must_use]
pub fn effective_cost(rank: u32, score: Option<f64>) -> f64 {
    let cost = score
        .filter(|s| s.is_finite())
        .unwrap_or_else(|| f64::from(rank.saturating_sub(1)) * RANK_COST_STEP);
    cost.max(0.0)
}

#[must_use]
pub fn fitness(cost: f64) -> f64 {
    1.0 / (1.0 + cost)
}

/// Structured details keep their speaker and role; only text fields are converted.
#[must_use]
pub fn normalize_details(details: Vec<Detail>) -> Vec<Detail> {
    details
        .into_iter()
        .map(|detail| Detail {
            content: to_simplified(&detail.content),
            contradiction: detail.contradiction.as_deref().map(to_simplified),
            ..detail
        })
        .collect()
}

/// Older flat reasons become `system/info` details with an inferred truth flag.
#[must_use]
pub fn normalize_reasons(reasons: Vec<String>) -> Vec<Detail> {
    reasons
        .into_iter()
        .map(|reason| {
            let content = to_simplified(&reason);
            let is_truth = !LIE_MARKERS.iter().any(|marker| content.contains(marker));
            Detail::info(content, is_truth)
        })
        .collect()
}

fn normalize_evidence(evidence: Evidence) -> Vec<Detail> {
    match evidence {
        Evidence::Details(details) => normalize_details(details),
        Evidence::Reasons(reasons) => normalize_reasons(reasons),
        Evidence::Missing => Vec::new(),
    }
}

/// Weight, convert and order a batch.
///
/// Costs come from the wire ranks (missing ones default to position); the
/// output is then renumbered so rank 1 is the lowest cost.
#[must_use]
pub fn normalize(batch: Vec<RawHypothesis>) -> Vec<Hypothesis> {
    let mut out: Vec<Hypothesis> = batch
        .into_iter()
        .enumerate()
        .map(|(idx, mut raw)| {
            let position = u32::try_from(idx + 1).unwrap_or(u32::MAX);
            let rank = raw.rank.filter(|r| *r > 0).unwrap_or(position);
            let details = normalize_evidence(raw.take_evidence());
            Hypothesis {
                rank,
                impostors: raw.impostors.into_iter().map(|n| to_simplified(&n)).collect(),
                cost: effective_cost(rank, raw.score),
                weight: 0.0,
                details,
            }
        })
        .collect();

    let total: f64 = out.iter().map(|h| fitness(h.cost)).sum();
    if total > 0.0 {
        for hypothesis in &mut out {
            hypothesis.weight = fitness(hypothesis.cost) / total * 100.0;
        }
    }

    out.sort_by(|a, b| a.cost.total_cmp(&b.cost).then(a.rank.cmp(&b.rank)));
    for (idx, hypothesis) in out.iter_mut().enumerate() {
        hypothesis.rank = u32::try_from(idx + 1).unwrap_or(u32::MAX);
    }
    out
}
