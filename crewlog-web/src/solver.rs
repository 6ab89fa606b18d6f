//! Browser transport for the reasoning service.
use crate::game::{RawHypothesis, ResolverConfig, SolveRequest, SolverTransport, TransportError};
use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Duration;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures on the JavaScript side of a solve request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebSolverError {
    #[error("no browser window available")]
    NoWindow,
    #[error("request aborted after {0}ms")]
    Aborted(u32),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl WebSolverError {
    #[must_use]
    pub fn from_js(value: JsValue) -> Self {
        Self::Js(crate::dom::js_error_message(&value))
    }
}

impl From<WebSolverError> for TransportError {
    fn from(err: WebSolverError) -> Self {
        match err {
            WebSolverError::Aborted(ms) => Self::Timeout(Duration::from_millis(u64::from(ms))),
            WebSolverError::Status(code) => Self::Status(code),
            WebSolverError::Decode(msg) => Self::Malformed(msg),
            WebSolverError::NoWindow | WebSolverError::Js(_) | WebSolverError::Encode(_) => {
                Self::Network(err.to_string())
            }
        }
    }
}

/// Compile-time endpoint override, read the same way as `PUBLIC_URL`.
#[must_use]
pub fn endpoint_override() -> Option<&'static str> {
    option_env!("CREWLOG_SOLVER_URL")
        .map(str::trim)
        .filter(|url| !url.is_empty())
}

#[must_use]
pub fn resolver_config() -> ResolverConfig {
    let config = ResolverConfig::default();
    match endpoint_override() {
        Some(url) => config.with_endpoint(url),
        None => config,
    }
}

/// `fetch`-based transport. Outside a browser every call fails as a network error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl SolverTransport for FetchTransport {
    async fn solve(
        &self,
        request: &SolveRequest,
        timeout: Duration,
    ) -> Result<Vec<RawHypothesis>, TransportError> {
        let body = serde_json::to_string(request)
            .map_err(|e| WebSolverError::Encode(e.to_string()))?;
        let timeout_ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        let json = crate::dom::post_json(&self.endpoint, &body, timeout_ms).await?;
        let batch = serde_wasm_bindgen::from_value::<Vec<RawHypothesis>>(json)
            .map_err(|e| WebSolverError::Decode(e.to_string()))?;
        Ok(batch)
    }
}

fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let random = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        (random << 32) ^ now
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }
}

/// Randomness for the local heuristic's synthesized details.
#[must_use]
pub fn session_rng() -> SmallRng {
    SmallRng::seed_from_u64(entropy_seed())
}
