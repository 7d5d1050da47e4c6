use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::warn;

use super::engine::ValuationEngine;
use super::gateway::{EvaluationError, EvaluationGateway, METHOD_NOT_ALLOWED_ERROR};
use super::request::EvaluationRequest;

pub const EVALUATE_PATH: &str = "/api/evaluate";

/// Router exposing the evaluation endpoint.
///
/// Every response from this route, including rejections, carries the cross-origin headers.
pub fn evaluation_router<V>(gateway: Arc<EvaluationGateway<V>>) -> Router
where
    V: ValuationEngine + 'static,
{
    Router::new()
        .route(
            EVALUATE_PATH,
            post(evaluate_handler::<V>)
                .options(preflight_handler)
                .fallback(method_not_allowed_handler),
        )
        .layer(middleware::map_response(apply_cors_headers))
        .with_state(gateway)
}

pub(crate) async fn apply_cors_headers<B>(mut response: Response<B>) -> Response<B> {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

pub(crate) async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub(crate) async fn method_not_allowed_handler() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": METHOD_NOT_ALLOWED_ERROR })),
    )
        .into_response()
}

pub(crate) async fn evaluate_handler<V>(
    State(gateway): State<Arc<EvaluationGateway<V>>>,
    payload: Result<Json<EvaluationRequest>, JsonRejection>,
) -> Response
where
    V: ValuationEngine + 'static,
{
    let outcome = match payload {
        Ok(Json(request)) => gateway.evaluate(&request).await,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "evaluation rejected: unreadable body");
            Err(EvaluationError::InvalidBody(rejection.body_text()))
        }
    };

    match outcome {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => (err.status(), Json(gateway.error_response(&err))).into_response(),
    }
}
