use anyhow::Result;
use crewlog_game::{Resolution, Session, SolveRequest};
use rand_chacha::ChaCha8Rng;

pub mod catalog;

/// Everything a scenario expectation gets to look at after one resolution.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub session: Session,
    pub request: SolveRequest,
    pub resolution: Resolution,
}

pub type Builder = fn(&mut ChaCha8Rng) -> Result<Session>;
pub type Expectation = fn(&ScenarioOutcome) -> Result<()>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    build: Builder,
    expectation: Expectation,
}

impl Scenario {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        build: Builder,
        expectation: Expectation,
    ) -> Self {
        Self {
            key,
            name,
            description,
            build,
            expectation,
        }
    }

    /// An active session ready for `begin_resolution`.
    pub fn build(&self, rng: &mut ChaCha8Rng) -> Result<Session> {
        (self.build)(rng)
    }

    pub fn check(&self, outcome: &ScenarioOutcome) -> Result<()> {
        (self.expectation)(outcome)
    }
}

pub fn get_scenario(key: &str) -> Option<Scenario> {
    catalog::catalog_scenarios()
        .into_iter()
        .find(|s| s.key == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog::catalog_scenarios()
        .into_iter()
        .map(|s| (s.key, s.description))
        .collect()
}

/// Replace `all` with every catalog key, keeping explicit names in order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for key in requested {
        if key == "all" {
            for (k, _) in list_scenarios() {
                if !out.iter().any(|existing| existing == k) {
                    out.push(k.to_string());
                }
            }
        } else if !out.contains(key) {
            out.push(key.clone());
        }
    }
    out
}
