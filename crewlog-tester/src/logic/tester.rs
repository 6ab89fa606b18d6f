use anyhow::{Context, Result};
use colored::Colorize;
use crewlog_game::{OfflineTransport, Resolver, ResolverConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::invariants::{check_fallback, check_resolution};
use crate::common::scenario::{Scenario, ScenarioOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

/// Runs catalog scenarios through the resolver with no network.
pub struct LogicTester {
    resolver: Resolver<OfflineTransport>,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(config: ResolverConfig, verbose: bool) -> Self {
        Self {
            resolver: Resolver::new(OfflineTransport, config),
            verbose,
        }
    }

    pub async fn run_scenario(
        &self,
        scenario: &Scenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        let mut results = Vec::with_capacity(seeds.len());
        for &seed in seeds {
            if self.verbose {
                println!(
                    "🧪 Testing scenario: {} (seed {seed})",
                    scenario.name.bright_white()
                );
            }
            results.push(self.run_single_scenario(scenario, seed, iterations).await);
        }
        results
    }

    async fn run_single_scenario(
        &self,
        scenario: &Scenario,
        seed: u64,
        iterations: usize,
    ) -> ScenarioResult {
        let mut successes = 0;
        let mut failures = Vec::new();
        let mut durations = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let start = Instant::now();
            let iteration_seed = seed.wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            match self.run_iteration(scenario, iteration_seed).await {
                Ok(problems) if problems.is_empty() => successes += 1,
                Ok(problems) => failures.push(format!(
                    "Iteration {} (seed {iteration_seed}): {}",
                    i + 1,
                    problems.join("; ")
                )),
                Err(err) => failures.push(format!(
                    "Iteration {} (seed {iteration_seed}): {err:#}",
                    i + 1
                )),
            }
            durations.push(start.elapsed());
        }

        let average_duration = if durations.is_empty() {
            Duration::ZERO
        } else {
            durations.iter().sum::<Duration>() / u32::try_from(durations.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            seed,
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
        }
    }

    /// One build-resolve-check pass. `Ok` carries invariant violations, `Err` a broken scenario.
    async fn run_iteration(&self, scenario: &Scenario, seed: u64) -> Result<Vec<String>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = scenario.build(&mut rng)?;
        let request = session
            .begin_resolution()
            .context("scenario session could not enter review")?;
        let resolution = self.resolver.resolve(&request, &mut rng).await;

        let mut problems = check_resolution(&resolution);
        problems.extend(check_fallback(&resolution));
        if !session.complete_resolution(resolution.clone()) {
            problems.push(String::from("session refused the resolution"));
        }

        let outcome = ScenarioOutcome {
            session,
            request,
            resolution,
        };
        if let Err(err) = scenario.check(&outcome) {
            problems.push(format!("{err:#}"));
        }
        Ok(problems)
    }
}

pub(crate) mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}
