//! HTTP API
//!
//! JSON routes for the mobile front end:
//!
//! - `POST /api/food/nutrition` `{name}`
//! - `POST /api/food/report` `{name, grams?, confidence?, dailyCalories?}`
//! - `GET  /api/foods`
//! - `POST /api/health/calculate` `{age, gender, weight, height, activityLevel?}`
//! - `GET  /api/status`
//! - `GET  /health`

mod response;
mod routes;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::nutrition::NutritionResolver;
use crate::tools::status::StatusTracker;

pub use response::ApiResponse;
pub use routes::FoodReportRequest;

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub resolver: NutritionResolver,
    pub status: Arc<StatusTracker>,
}

impl AppState {
    pub fn new(resolver: NutritionResolver) -> Self {
        Self {
            resolver,
            status: Arc::new(StatusTracker::new(resolver)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(NutritionResolver::builtin())
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/food/nutrition", post(routes::food_nutrition))
        .route("/api/food/report", post(routes::food_report))
        .route("/api/foods", get(routes::list_foods))
        .route("/api/health/calculate", post(routes::health_calculate))
        .route("/api/status", get(routes::service_status))
        .route("/health", get(routes::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
