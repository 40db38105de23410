use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::Profile;
use super::repository::ProfileStore;
use super::service::{AdvisorService, AdvisorServiceError};

/// Body accepted by the hiscores import route.
#[derive(Debug, Clone, Deserialize)]
pub struct HiscoresImport {
    #[serde(default)]
    pub player_name: String,
    pub payload: String,
}

/// Router builder exposing the profile and advice endpoints.
pub fn advisor_router<S>(service: Arc<AdvisorService<S>>) -> Router
where
    S: ProfileStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/profile",
            get(profile_handler::<S>).put(update_profile_handler::<S>),
        )
        .route("/api/v1/profile/hiscores", put(import_hiscores_handler::<S>))
        .route("/api/v1/advice", post(advice_handler::<S>))
        .with_state(service)
}

pub(crate) async fn profile_handler<S>(State(service): State<Arc<AdvisorService<S>>>) -> Response
where
    S: ProfileStore + 'static,
{
    match service.profile() {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_profile_handler<S>(
    State(service): State<Arc<AdvisorService<S>>>,
    axum::Json(profile): axum::Json<Profile>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.update_profile(profile) {
        Ok(_) => {
            let payload = json!({ "message": "profile updated" });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Advice for the posted profile, or for the stored one when the body is empty.
///
/// A non-empty body must be a JSON profile; anything else is rejected rather
/// than falling back to the stored profile.
pub(crate) async fn advice_handler<S>(
    State(service): State<Arc<AdvisorService<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response
where
    S: ProfileStore + 'static,
{
    let advice = if body.iter().all(u8::is_ascii_whitespace) {
        service.advise()
    } else {
        if !has_json_content_type(&headers) {
            let payload = json!({
                "error": "expected request with `Content-Type: application/json`",
            });
            return (StatusCode::UNSUPPORTED_MEDIA_TYPE, axum::Json(payload)).into_response();
        }
        match axum::Json::<Profile>::from_bytes(&body) {
            Ok(axum::Json(profile)) => service.advise_for(&profile),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "rejected advice body");
                let payload = json!({ "error": rejection.body_text() });
                return (rejection.status(), axum::Json(payload)).into_response();
            }
        }
    };
    match advice {
        Ok(advice) => (StatusCode::OK, axum::Json(advice)).into_response(),
        Err(error) => error_response(error),
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}

pub(crate) async fn import_hiscores_handler<S>(
    State(service): State<Arc<AdvisorService<S>>>,
    axum::Json(request): axum::Json<HiscoresImport>,
) -> Response
where
    S: ProfileStore + 'static,
{
    match service.import_hiscores(&request.player_name, &request.payload) {
        Ok(profile) => (StatusCode::OK, axum::Json(profile)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AdvisorServiceError) -> Response {
    let status = match &error {
        AdvisorServiceError::Hiscores(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AdvisorServiceError::Store(_) | AdvisorServiceError::Engine(_) => {
            tracing::error!(error = %error, "advisor request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
