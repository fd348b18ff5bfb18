use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;

use crate::lookup::types::LookupError;
use crate::lookup::{lookup_nearby, LookupRequest};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

/// Map a lookup failure onto the status/plain-text pair the caller sees.
/// Upstream status codes are forwarded as-is.
fn error_response(err: &LookupError) -> (StatusCode, String) {
    let status = match err {
        LookupError::InvalidInput => StatusCode::BAD_REQUEST,
        LookupError::UpstreamStatus(code) => {
            StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        LookupError::NoCoordinates => StatusCode::INTERNAL_SERVER_ERROR,
        LookupError::Transport(_) => StatusCode::BAD_GATEWAY,
    };
    (status, err.to_string())
}

// ─── POST /api/scrap ─────────────────────────────────────────────

pub async fn scrap(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LookupRequest>,
) -> Response {
    let start = Instant::now();

    // The outbound calls are blocking; keep them off the async workers.
    let outcome = tokio::task::spawn_blocking({
        let providers = state.config.providers.clone();
        let req = req.clone();
        move || lookup_nearby(&req, &providers)
    })
    .await;

    let result = match outcome {
        Ok(r) => r,
        Err(e) => {
            eprintln!(
                "[{}] POST /api/scrap type={} location={} -> lookup task panicked: {}",
                Utc::now().format("%H:%M:%S"),
                req.category,
                req.location,
                e,
            );
            return (StatusCode::INTERNAL_SERVER_ERROR, "Lookup failed").into_response();
        }
    };

    let elapsed = start.elapsed();
    match result {
        Ok(found) => {
            eprintln!(
                "[{}] POST /api/scrap type={} location={} -> {} places ({:.1}ms)",
                Utc::now().format("%H:%M:%S"),
                req.category,
                req.location,
                found.results.len(),
                elapsed.as_secs_f64() * 1000.0,
            );
            (StatusCode::OK, Json(found)).into_response()
        }
        Err(err) => {
            eprintln!(
                "[{}] POST /api/scrap type={} location={} -> {} ({:.1}ms)",
                Utc::now().format("%H:%M:%S"),
                req.category,
                req.location,
                err,
                elapsed.as_secs_f64() * 1000.0,
            );
            error_response(&err).into_response()
        }
    }
}

// ─── GET /api/health ─────────────────────────────────────────────

pub async fn health() -> &'static str {
    "Health is OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        let (status, body) = error_response(&LookupError::InvalidInput);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Fields are not valid");

        let (status, _) = error_response(&LookupError::UpstreamStatus(403));
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = error_response(&LookupError::NoCoordinates);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = error_response(&LookupError::Transport("refused".into()));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_unmappable_upstream_status_falls_back() {
        let (status, _) = error_response(&LookupError::UpstreamStatus(42));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
