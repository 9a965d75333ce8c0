//! Spaza Assist API
//!
//! Multi-tenant REST backend for the local-business assistant: business
//! onboarding, staff sessions, bookings, leads, attendance, overtime,
//! FAQs and the mocked marketing-insights endpoints. All state lives in
//! an injected in-memory store; a durable backend can replace it behind
//! the same contract.

use axum::{
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::Config;
use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
}

pub fn build_router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // --- Tenant-gated routes (business id header) ---
    let staff_tenant_routes = Router::new()
        .route("/login", post(routes::staff::login))
        .route("/create", post(routes::staff::create_staff))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::tenant::resolve_tenant,
        ));

    // --- Session-gated routes (bearer token) ---
    let staff_session_routes = Router::new()
        .route("/agenda", get(routes::staff::agenda))
        .route("/clock-in", post(routes::staff::clock_in))
        .route("/clock-out", post(routes::staff::clock_out))
        .route("/overtime", post(routes::staff::overtime))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ));

    let booking_routes = Router::new()
        .route(
            "/",
            post(routes::bookings::create_booking).get(routes::bookings::list_bookings),
        )
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::tenant::resolve_tenant,
        ));

    let lead_routes = Router::new()
        .route("/", post(routes::leads::create_lead))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::tenant::resolve_tenant,
        ));

    let faq_routes = Router::new()
        .route(
            "/",
            get(routes::faqs::list_faqs).post(routes::faqs::replace_faqs),
        )
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::tenant::resolve_tenant,
        ));

    let insights_routes = Router::new()
        .route("/weekly", post(routes::insights::weekly))
        .route("/forecast", post(routes::insights::forecast))
        .layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::tenant::resolve_tenant,
        ));

    Router::new()
        .route("/", get(routes::health::health))
        .route("/health", get(routes::health::health))
        .route("/business/create", post(routes::business::create_business))
        .nest("/staff", staff_tenant_routes.merge(staff_session_routes))
        .nest("/bookings", booking_routes)
        .nest("/leads", lead_routes)
        .nest("/faqs", faq_routes)
        .nest("/insights", insights_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
