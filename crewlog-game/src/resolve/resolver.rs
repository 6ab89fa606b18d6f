//! Remote resolution with a bounded wait and a local fallback.
use crate::resolve::fallback::{SuspicionWeights, fallback_hypotheses};
use crate::resolve::normalize::{Hypothesis, normalize};
use crate::resolve::wire::{RawHypothesis, SolveRequest};
use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://backend-logic.zeabur.app/solve";
pub const DEFAULT_TIMEOUT_MS: u64 = 8_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("no response within {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Delivers one request to the reasoning service.
///
/// Implementations must give up once `timeout` has elapsed and report
/// [`TransportError::Timeout`].
#[async_trait(?Send)]
pub trait SolverTransport {
    async fn solve(
        &self,
        request: &SolveRequest,
        timeout: Duration,
    ) -> Result<Vec<RawHypothesis>, TransportError>;
}

/// Transport for sessions without a reachable service. Every call goes to the fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl SolverTransport for OfflineTransport {
    async fn solve(
        &self,
        _request: &SolveRequest,
        _timeout: Duration,
    ) -> Result<Vec<RawHypothesis>, TransportError> {
        Err(TransportError::Network(String::from("offline")))
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub weights: SuspicionWeights,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            weights: SuspicionWeights::default(),
        }
    }
}

impl ResolverConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub const fn with_weights(mut self, weights: SuspicionWeights) -> Self {
        self.weights = weights;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionSource {
    Remote,
    Fallback { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub hypotheses: Vec<Hypothesis>,
    pub source: ResolutionSource,
}

impl Resolution {
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self.source, ResolutionSource::Fallback { .. })
    }

    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.hypotheses.iter().map(|h| h.weight).sum()
    }
}

/// Decide between the remote outcome and the local heuristic, then normalize.
///
/// An empty remote list is treated like a malformed response.
pub fn settle<R: Rng + ?Sized>(
    outcome: Result<Vec<RawHypothesis>, TransportError>,
    request: &SolveRequest,
    weights: &SuspicionWeights,
    rng: &mut R,
) -> Resolution {
    let outcome = outcome.and_then(|batch| {
        if batch.is_empty() {
            Err(TransportError::Malformed(String::from("empty hypothesis list")))
        } else {
            Ok(batch)
        }
    });

    let (batch, source) = match outcome {
        Ok(batch) => (batch, ResolutionSource::Remote),
        Err(err) => {
            log::warn!("solver unavailable, using local heuristic: {err}");
            let batch = fallback_hypotheses(&request.players, &request.logs, weights, rng);
            (
                batch,
                ResolutionSource::Fallback {
                    reason: err.to_string(),
                },
            )
        }
    };

    let hypotheses = normalize(batch);
    log::info!("resolved {} hypotheses", hypotheses.len());
    Resolution { hypotheses, source }
}

pub struct Resolver<T> {
    transport: T,
    config: ResolverConfig,
}

impl<T: SolverTransport> Resolver<T> {
    pub const fn new(transport: T, config: ResolverConfig) -> Self {
        Self { transport, config }
    }

    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Resolve `request`. Never fails; transport errors yield the fallback set.
    pub async fn resolve<R: Rng + ?Sized>(&self, request: &SolveRequest, rng: &mut R) -> Resolution {
        log::debug!(
            "resolving {} players, {} log entries via {}",
            request.players.len(),
            request.logs.len(),
            self.config.endpoint
        );
        let outcome = self.transport.solve(request, self.config.timeout()).await;
        settle(outcome, request, &self.config.weights, rng)
    }
}

/// Bound `future` by `timeout`, mapping elapsed time to [`TransportError::Timeout`].
#[cfg(feature = "async")]
pub async fn with_deadline<F, V>(timeout: Duration, future: F) -> Result<V, TransportError>
where
    F: std::future::Future<Output = Result<V, TransportError>>,
{
    tokio::time::timeout(timeout, future)
        .await
        .unwrap_or(Err(TransportError::Timeout(timeout)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, LogEntry};
    use crate::roster::{PlayerPayload, PlayerStatus};
    use crate::resolve::wire::Detail;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request() -> SolveRequest {
        let players = ["Red", "Blue", "Green"]
            .iter()
            .map(|n| PlayerPayload {
                name: (*n).to_string(),
                color: String::from("#ffffff"),
                status: PlayerStatus::Alive,
            })
            .collect();
        SolveRequest {
            players,
            logs: vec![LogEntry::new(
                EventKind::Accusation,
                Some("Red".into()),
                Some("Blue".into()),
                None,
            )],
            impostor_count: 1,
        }
    }

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config: ResolverConfig = serde_json::from_str(r#"{"timeout_ms": 250}"#).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.weights, SuspicionWeights::default());
        assert_eq!(ResolverConfig::default().timeout(), Duration::from_secs(8));
    }

    #[test]
    fn remote_batch_is_normalized() {
        let batch = vec![
            RawHypothesis {
                rank: Some(1),
                impostors: vec!["Blue".into()],
                score: Some(1.0),
                details: Some(vec![Detail::info("邏輯", true)]),
                reason: None,
            },
            RawHypothesis {
                rank: Some(2),
                impostors: vec!["Red".into()],
                score: None,
                details: None,
                reason: Some(vec!["Red 撒謊了".into()]),
            },
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let resolution = settle(Ok(batch), &request(), &SuspicionWeights::default(), &mut rng);
        assert_eq!(resolution.source, ResolutionSource::Remote);
        assert_eq!(resolution.hypotheses.len(), 2);
        assert!((resolution.total_weight() - 100.0).abs() < 1e-9);
        assert_eq!(resolution.hypotheses[0].details[0].content, "逻辑");
        assert!(!resolution.hypotheses[1].details[0].is_truth);
    }

    #[test]
    fn errors_and_empty_lists_fall_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for outcome in [
            Err(TransportError::Status(502)),
            Err(TransportError::Timeout(Duration::from_millis(5))),
            Ok(Vec::new()),
        ] {
            let resolution = settle(outcome, &request(), &SuspicionWeights::default(), &mut rng);
            assert!(resolution.is_fallback());
            assert_eq!(resolution.hypotheses.len(), 2);
            assert_eq!(resolution.hypotheses[0].impostors[0], "Blue");
        }
    }

    #[test]
    fn offline_resolver_always_falls_back() {
        let resolver = Resolver::new(OfflineTransport, ResolverConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let resolution = futures::executor::block_on(resolver.resolve(&request(), &mut rng));
        match resolution.source {
            ResolutionSource::Fallback { reason } => assert!(reason.contains("offline")),
            ResolutionSource::Remote => panic!("offline transport cannot succeed"),
        }
    }

    #[test]
    fn source_serializes_with_kind_tag() {
        let value = serde_json::to_value(ResolutionSource::Fallback {
            reason: String::from("x"),
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"kind": "fallback", "reason": "x"}));
    }
}
