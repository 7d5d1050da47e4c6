use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::request::EvaluationRequest;

/// Whatever the valuation engine returned, kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvaluationResult(Value);

impl EvaluationResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Value> for EvaluationResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// The valuation computation, consumed only through this boundary so the gateway can be
/// exercised with substitute engines.
pub trait ValuationEngine: Send + Sync {
    fn estimate(
        &self,
        request: &EvaluationRequest,
    ) -> impl Future<Output = Result<EvaluationResult, ValuationError>> + Send;
}

/// Failure raised by a valuation engine.
#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    #[error("valuation engine unreachable")]
    Transport(#[from] reqwest::Error),
    #[error("valuation engine responded with status {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("valuation engine returned a body that is not JSON")]
    Decode(#[source] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
}
