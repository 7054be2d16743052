//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: The store is healthy
/// - **503 Service Unavailable**: The store reported a failure
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    if state.store.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: None,
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Store health check failed".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlStore;
    use axum::{Router, routing::get};
    use axum_test::TestServer;
    use std::sync::Arc;

    fn server(healthy: bool) -> TestServer {
        let mut store = MockUrlStore::new();
        store.expect_health_check().returning(move || healthy);

        let app = Router::new()
            .route("/health", get(health_handler))
            .with_state(AppState::new(Arc::new(store)));

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let response = server(true).get("/health").await;

        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["checks"]["store"]["status"], "ok");
        assert!(body["checks"]["store"].get("message").is_none());
    }

    #[tokio::test]
    async fn test_health_degraded() {
        let response = server(false).get("/health").await;

        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"]["store"]["status"], "error");
    }
}
