use async_trait::async_trait;
use crewlog_game::{RawHypothesis, SolveRequest, SolverTransport, TransportError, with_deadline};
use std::time::Duration;

/// `reqwest` transport for probing a live reasoning service.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, request: &SolveRequest) -> Result<Vec<RawHypothesis>, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        response
            .json::<Vec<RawHypothesis>>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}

#[async_trait(?Send)]
impl SolverTransport for HttpTransport {
    async fn solve(
        &self,
        request: &SolveRequest,
        timeout: Duration,
    ) -> Result<Vec<RawHypothesis>, TransportError> {
        log::debug!("POST {} ({} log entries)", self.endpoint, request.logs.len());
        with_deadline(timeout, self.post(request)).await
    }
}
