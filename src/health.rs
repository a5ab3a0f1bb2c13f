//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{error::Error, state::AppState, store::UserStore};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health<S: UserStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check with dependency validation (readiness probe)
///
/// Returns 200 OK if the store answers, 503 Service Unavailable otherwise.
pub async fn readiness<S: UserStore>(
    State(state): State<AppState<S>>,
) -> Result<impl IntoResponse, Error> {
    let mut dependencies = HashMap::new();
    let mut all_ready = true;

    match state.store().find_all().await {
        Ok(users) => {
            dependencies.insert(
                "store".to_string(),
                DependencyStatus {
                    healthy: true,
                    message: Some(format!("{} records", users.len())),
                },
            );
        }
        Err(e) => {
            tracing::error!("Store health check failed: {}", e);
            all_ready = false;
            dependencies.insert(
                "store".to_string(),
                DependencyStatus {
                    healthy: false,
                    message: Some(e.to_string()),
                },
            );
        }
    }

    let response = ReadinessResponse {
        ready: all_ready,
        service: state.config().service.name.clone(),
        dependencies,
    };

    let status = if all_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status, Json(response)))
}
