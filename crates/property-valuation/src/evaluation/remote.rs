use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::engine::{EvaluationResult, ValuationEngine, ValuationError};
use super::request::EvaluationRequest;

/// Valuation engine reached over HTTP: the request is POSTed as JSON and the reply body
/// is returned verbatim.
#[derive(Debug, Clone)]
pub struct HttpValuationEngine {
    client: Client,
    endpoint: Url,
}

impl HttpValuationEngine {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ValuationEngine for HttpValuationEngine {
    async fn estimate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, ValuationError> {
        debug!(endpoint = %self.endpoint, "requesting valuation");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), "valuation engine replied");

        if !status.is_success() {
            return Err(ValuationError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(ValuationError::Decode)?;
        Ok(EvaluationResult::new(value))
    }
}
