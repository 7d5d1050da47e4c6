//! Evaluation request gateway: validation, delegation to the valuation engine, and the
//! HTTP surface that wraps them.

pub mod engine;
pub mod gateway;
pub mod remote;
pub mod request;
pub mod router;
pub mod summary;

#[cfg(test)]
mod tests;

pub use engine::{EvaluationResult, ValuationEngine, ValuationError};
pub use gateway::{
    ErrorResponse, EvaluationError, EvaluationGateway, GatewayConfig, EVALUATION_FAILED_ERROR,
    INVALID_BODY_ERROR, METHOD_NOT_ALLOWED_ERROR, REQUIRED_FIELDS_ERROR,
};
pub use remote::HttpValuationEngine;
pub use request::EvaluationRequest;
pub use router::{evaluation_router, EVALUATE_PATH};
pub use summary::ValuationSummary;
