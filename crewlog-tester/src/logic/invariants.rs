use crewlog_game::Resolution;

const WEIGHT_EPSILON: f64 = 1e-6;

/// Properties every resolution must satisfy, whatever produced it.
pub fn check_resolution(resolution: &Resolution) -> Vec<String> {
    let mut failures = Vec::new();
    if resolution.hypotheses.is_empty() {
        failures.push(String::from("no hypotheses returned"));
        return failures;
    }
    let total = resolution.total_weight();
    if (total - 100.0).abs() > WEIGHT_EPSILON {
        failures.push(format!("weights sum to {total:.6}, not 100"));
    }
    for (idx, hypothesis) in resolution.hypotheses.iter().enumerate() {
        if usize::try_from(hypothesis.rank).ok() != Some(idx + 1) {
            failures.push(format!(
                "position {} carries rank {}",
                idx + 1,
                hypothesis.rank
            ));
        }
    }
    for pair in resolution.hypotheses.windows(2) {
        if pair[0].cost > pair[1].cost {
            failures.push(format!(
                "rank {} (cost {}) sorts before rank {} (cost {})",
                pair[0].rank, pair[0].cost, pair[1].rank, pair[1].cost
            ));
        }
    }
    failures
}

/// Extra checks for a locally produced result set.
pub fn check_fallback(resolution: &Resolution) -> Vec<String> {
    let mut failures = Vec::new();
    if !resolution.is_fallback() {
        failures.push(String::from("expected the local heuristic to answer"));
    }
    if resolution.hypotheses.len() != 2 {
        failures.push(format!(
            "expected exactly two fallback hypotheses, got {}",
            resolution.hypotheses.len()
        ));
    }
    failures
}
