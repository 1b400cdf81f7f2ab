//! Route modules and the assembled application router.

pub mod health;
pub mod inventory;

use axum::Router;

use crate::state::AppState;

/// Builds the application router. Middleware layers are added by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/v1/inventory", inventory::router())
        .with_state(state)
}
