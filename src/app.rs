use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/style.css", get(handlers::stylesheet))
        .route("/login", get(handlers::login_page))
        .route("/session", post(handlers::login))
        .route("/logout", post(handlers::logout))
        .route("/reload", post(handlers::reload))
        .route("/tabs/:tab", get(handlers::tab_page))
        .route("/orders/:id/approve", post(handlers::approve))
        .route("/orders/:id/reject", post(handlers::reject))
        .route("/orders/:id/assign", get(handlers::assign_form).post(handlers::assign))
        .route("/orders/:id/warehouse", post(handlers::warehouse))
        .route("/orders/:id/deliver", post(handlers::deliver))
        .route("/orders/:id/dispute", get(handlers::dispute_form).post(handlers::dispute))
        .route("/orders/:id/resolve", get(handlers::resolve_form).post(handlers::resolve))
        .route("/orders/:id/proforma", post(handlers::proforma))
        .route("/orders/:id/invoice", post(handlers::invoice))
        .route("/api/health", get(handlers::health))
        .route("/api/orders", get(handlers::api_orders))
        .route("/api/badges", get(handlers::api_badges))
        .route("/api/actions", post(handlers::api_action))
        .with_state(state)
}
