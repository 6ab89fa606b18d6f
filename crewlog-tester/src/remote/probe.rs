use anyhow::{Context, Result};
use crewlog_game::{Resolver, ResolverConfig, ResolutionSource};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::HttpTransport;
use crate::common::scenario::Scenario;
use crate::logic::invariants::check_resolution;
use crate::logic::tester::duration_serde;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteResult {
    pub scenario_name: String,
    pub seed: u64,
    pub source: ResolutionSource,
    pub hypotheses: usize,
    pub invariant_failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

impl RemoteResult {
    pub const fn answered_remotely(&self) -> bool {
        matches!(self.source, ResolutionSource::Remote)
    }
}

/// Sends catalog sessions to a live endpoint and records how it answered.
pub struct RemoteProber {
    resolver: Resolver<HttpTransport>,
}

impl RemoteProber {
    pub fn new(config: ResolverConfig) -> Self {
        let transport = HttpTransport::new(config.endpoint.clone());
        Self {
            resolver: Resolver::new(transport, config),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.resolver.transport().endpoint()
    }

    /// Fallback answers are recorded, never treated as failures.
    pub async fn probe(&self, scenario: &Scenario, seed: u64) -> Result<RemoteResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = scenario.build(&mut rng)?;
        let request = session
            .begin_resolution()
            .context("scenario session could not enter review")?;
        let start = Instant::now();
        let resolution = self.resolver.resolve(&request, &mut rng).await;
        let duration = start.elapsed();

        Ok(RemoteResult {
            scenario_name: scenario.name.to_string(),
            seed,
            invariant_failures: check_resolution(&resolution),
            hypotheses: resolution.hypotheses.len(),
            source: resolution.source,
            duration,
        })
    }
}
