use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};

use crate::evaluation::{
    evaluation_router, EvaluationGateway, EvaluationRequest, EvaluationResult, GatewayConfig,
    ValuationEngine, ValuationError, EVALUATE_PATH,
};

/// Engine returning a fixed payload and recording what it was asked.
pub(super) struct FixedEngine {
    result: Value,
    seen: Mutex<Vec<EvaluationRequest>>,
}

impl FixedEngine {
    pub(super) fn new(result: Value) -> Self {
        Self {
            result,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.seen.lock().expect("engine mutex poisoned").len()
    }

    pub(super) fn requests(&self) -> Vec<EvaluationRequest> {
        self.seen.lock().expect("engine mutex poisoned").clone()
    }
}

impl ValuationEngine for FixedEngine {
    async fn estimate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<EvaluationResult, ValuationError> {
        self.seen
            .lock()
            .expect("engine mutex poisoned")
            .push(request.clone());
        Ok(EvaluationResult::new(self.result.clone()))
    }
}

/// Engine that always fails with a decode error wrapping a JSON parse failure.
#[derive(Default)]
pub(super) struct FailingEngine {
    calls: AtomicUsize,
}

impl FailingEngine {
    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ValuationEngine for FailingEngine {
    async fn estimate(
        &self,
        _request: &EvaluationRequest,
    ) -> Result<EvaluationResult, ValuationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let source = serde_json::from_str::<Value>("{").expect_err("truncated json");
        Err(ValuationError::Decode(source))
    }
}

pub(super) fn valuation() -> Value {
    json!({ "estimated_value": 750000, "confidence": 0.82 })
}

pub(super) fn riyadh_request() -> Value {
    json!({ "area": 150, "city": "Riyadh" })
}

pub(super) fn gateway<V>(engine: Arc<V>, expose_error_details: bool) -> Arc<EvaluationGateway<V>>
where
    V: ValuationEngine + 'static,
{
    Arc::new(EvaluationGateway::new(
        engine,
        GatewayConfig {
            expose_error_details,
        },
    ))
}

pub(super) fn router<V>(engine: Arc<V>, expose_error_details: bool) -> Router
where
    V: ValuationEngine + 'static,
{
    evaluation_router(gateway(engine, expose_error_details))
}

pub(super) fn post_json(body: &Value) -> Request<Body> {
    Request::post(EVALUATE_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("body serializes")))
        .expect("request builds")
}

pub(super) fn empty_request(method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(EVALUATE_PATH)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = read_body(response).await;
    serde_json::from_slice(&bytes).expect("body is json")
}

pub(super) fn header_str(response: &Response, name: header::HeaderName) -> Option<&str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub(super) fn assert_cors_headers(response: &Response) {
    assert_eq!(
        header_str(response, header::ACCESS_CONTROL_ALLOW_ORIGIN),
        Some("*")
    );
    assert_eq!(
        header_str(response, header::ACCESS_CONTROL_ALLOW_METHODS),
        Some("POST, OPTIONS")
    );
    assert_eq!(
        header_str(response, header::ACCESS_CONTROL_ALLOW_HEADERS),
        Some("Content-Type")
    );
}
