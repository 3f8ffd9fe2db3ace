//! HTTP API Layer
//!
//! This crate provides the REST API over one in-memory insurer using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for each resource
//! - **Middleware**: Request tracing and audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! The insurer sits behind a `tokio::sync::RwLock`. Every mutating request
//! takes the write lock for its whole duration, so operations on the insurer
//! never interleave.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(InsuranceCompany::new(now), config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_company::InsuranceCompany;

use crate::config::ApiConfig;
use crate::middleware::audit_middleware;
use crate::handlers::{billing, claims, contracts, health, persons};

/// The insurer shared by all handlers
pub type SharedCompany = Arc<RwLock<InsuranceCompany>>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub company: SharedCompany,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `company` - The insurer served by this API
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(company: InsuranceCompany, config: ApiConfig) -> Router {
    let state = AppState {
        company: Arc::new(RwLock::new(company)),
        config,
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let person_routes = Router::new()
        .route("/", post(persons::register_person))
        .route("/:id", get(persons::get_person));

    let contract_routes = Router::new()
        .route("/", get(contracts::list_contracts))
        .route("/vehicle", post(contracts::insure_vehicle))
        .route("/travel", post(contracts::insure_persons))
        .route("/master", post(contracts::create_master))
        .route("/:number", get(contracts::get_contract))
        .route("/:number/children", post(contracts::add_child))
        .route("/:number/deactivate", post(contracts::deactivate))
        .route("/:number/charge", post(billing::charge_contract))
        .route(
            "/:number/payments",
            post(billing::pay).get(billing::payment_history),
        );

    let clock_routes = Router::new()
        .route("/", get(billing::get_clock).put(billing::set_clock))
        .route("/advance", post(billing::advance_clock));

    let claims_routes = Router::new()
        .route("/vehicle", post(claims::vehicle_claim))
        .route("/travel", post(claims::travel_claim));

    let api_routes = Router::new()
        .nest("/persons", person_routes)
        .nest("/contracts", contract_routes)
        .nest("/clock", clock_routes)
        .route("/billing/charge", post(billing::charge_all))
        .nest("/claims", claims_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
