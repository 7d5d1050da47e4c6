use std::error::Error as StdError;
use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use tracing::{error, info, warn};

use super::engine::{EvaluationResult, ValuationEngine, ValuationError};
use super::request::EvaluationRequest;

pub const REQUIRED_FIELDS_ERROR: &str = "المساحة والمدينة مطلوبة";
pub const INVALID_BODY_ERROR: &str = "بيانات الطلب غير صالحة";
pub const EVALUATION_FAILED_ERROR: &str = "حدث خطأ أثناء التقييم";
pub const METHOD_NOT_ALLOWED_ERROR: &str = "Method not allowed";

/// Behavior switches injected at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Include the failure's source chain as `details` in 500 responses.
    pub expose_error_details: bool,
}

/// Bilingual failure envelope returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Reasons an evaluation request does not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum EvaluationError {
    #[error("Area and city are required fields")]
    MissingRequiredFields,
    #[error("{0}")]
    InvalidBody(String),
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

impl EvaluationError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingRequiredFields | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Valuation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors never carry details; engine failures only when `expose_details` is set.
    pub fn to_response(&self, expose_details: bool) -> ErrorResponse {
        match self {
            Self::MissingRequiredFields => ErrorResponse {
                error: REQUIRED_FIELDS_ERROR,
                message: self.to_string(),
                details: None,
            },
            Self::InvalidBody(reason) => ErrorResponse {
                error: INVALID_BODY_ERROR,
                message: reason.clone(),
                details: None,
            },
            Self::Valuation(source) => ErrorResponse {
                error: EVALUATION_FAILED_ERROR,
                message: source.to_string(),
                details: expose_details.then(|| render_source_chain(source)),
            },
        }
    }
}

/// One line per error in the `source()` chain, outermost first.
pub(crate) fn render_source_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Validates evaluation requests and delegates them to the valuation engine.
pub struct EvaluationGateway<V> {
    engine: Arc<V>,
    config: GatewayConfig,
}

impl<V> EvaluationGateway<V>
where
    V: ValuationEngine + 'static,
{
    pub fn new(engine: Arc<V>, config: GatewayConfig) -> Self {
        Self { engine, config }
    }

    pub fn config(&self) -> GatewayConfig {
        self.config
    }

    /// Check the required fields, then hand the untouched request to the engine.
    ///
    /// Each call is independent: no retries, no timeout, and the engine's result is
    /// returned exactly as produced.
    pub async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, EvaluationError> {
        if !request.has_required_fields() {
            warn!(
                has_area = request.area.is_some(),
                has_city = request.city.is_some(),
                "evaluation rejected: area and city are required"
            );
            return Err(EvaluationError::MissingRequiredFields);
        }

        match self.engine.estimate(request).await {
            Ok(result) => {
                info!(
                    city = request.city_name().unwrap_or_default(),
                    area = request.area_value().unwrap_or_default(),
                    "evaluation completed"
                );
                Ok(result)
            }
            Err(err) => {
                error!(error = %err, "valuation engine failed");
                Err(EvaluationError::Valuation(err))
            }
        }
    }

    pub fn error_response(&self, err: &EvaluationError) -> ErrorResponse {
        err.to_response(self.config.expose_error_details)
    }
}
