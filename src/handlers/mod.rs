//! HTTP handlers and route composition

pub mod users;

pub use users::{
    add_hours, create_user, delete_all_users, delete_user, get_user, list_users, update_user,
};

use axum::{routing::get, Router};

use crate::{health, state::AppState, store::UserStore};

/// Build the service router: the `/users` collection plus the health and
/// readiness probes.
pub fn routes<S: UserStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health::health::<S>))
        .route("/ready", get(health::readiness::<S>))
        .route(
            "/users",
            get(list_users::<S>)
                .post(create_user::<S>)
                .delete(delete_all_users::<S>),
        )
        .route(
            "/users/{id}",
            get(get_user::<S>)
                .put(update_user::<S>)
                .patch(add_hours::<S>)
                .delete(delete_user::<S>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, store::MemoryStore};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_router_exposes_health_probe() {
        let app = routes(AppState::new(Config::default(), MemoryStore::new()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}
