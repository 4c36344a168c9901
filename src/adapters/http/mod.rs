//! HTTP adapters - REST API implementations.

pub mod hotels;
pub mod middleware;

pub use hotels::{hotels_router, HotelsAppState};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

use axum::{routing::get, Json, Router};

/// GET /health - Liveness probe, no authentication.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Assembles the public router: `/health` plus the authenticated hotel routes.
///
/// The auth layer is a route layer, so unknown paths fall through to 404
/// instead of being rejected as unauthenticated.
pub fn app_router(hotels: HotelsAppState, validator: AuthState) -> Router {
    let protected = hotels_router()
        .with_state(hotels)
        .route_layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ));

    Router::new().route("/health", get(health)).merge(protected)
}
