use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{Response as HttpResponse, StatusCode},
    response::Response,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use shaderforge_protocol::{
    serialize_json, ErrorBody, GenerateShaderRequest, GenerateShaderResponse, HealthResponse,
    GENERATE_SHADER_ROUTE, HEALTH_ROUTE,
};
use shaderforge_provider::{ProviderError, ShaderCompletion};
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct AppState {
    provider: Arc<dyn ShaderCompletion>,
}

impl AppState {
    pub fn new(provider: Arc<dyn ShaderCompletion>) -> Self {
        Self { provider }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_ROUTE, get(http_health))
        .route(GENERATE_SHADER_ROUTE, post(http_generate_shader))
        .with_state(state)
}

async fn http_health() -> Result<Response, StatusCode> {
    build_response(StatusCode::OK, &HealthResponse::ok())
}

async fn http_generate_shader(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, StatusCode> {
    let request: GenerateShaderRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            log::debug!("Unparseable generate_shader body: {err}");
            GenerateShaderRequest::default()
        }
    };
    let Some(description) = request.description() else {
        log::info!("Rejected generate_shader request without description");
        return build_response(StatusCode::BAD_REQUEST, &ErrorBody::description_required());
    };

    let started = Instant::now();
    match state.provider.complete(description).await {
        Ok(raw) => {
            let shader_code = shaderforge_repair::repair(&raw);
            log::info!(
                "Generated shader in {} ms ({} chars raw, {} chars repaired)",
                started.elapsed().as_millis(),
                raw.len(),
                shader_code.len()
            );
            build_response(StatusCode::OK, &GenerateShaderResponse { shader_code })
        }
        Err(err) => {
            log::warn!("Upstream completion failed: {err}");
            build_response(StatusCode::BAD_REQUEST, &upstream_error_body(&err))
        }
    }
}

/// Client-facing payload for an upstream failure; details stay in the logs.
pub(crate) fn upstream_error_body(err: &ProviderError) -> ErrorBody {
    match err {
        ProviderError::Status(status) => ErrorBody::upstream_status(*status),
        ProviderError::Contract(_) | ProviderError::Transport(_) => ErrorBody::api_failure(),
    }
}

pub(crate) fn build_response<T: Serialize>(
    status: StatusCode,
    payload: &T,
) -> Result<Response, StatusCode> {
    let bytes = serialize_json(payload)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .into_bytes();

    HttpResponse::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(bytes))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
