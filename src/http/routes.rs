//! Route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use super::response::ApiResponse;
use super::AppState;
use crate::health::{FoodReport, ReportOptions};
use crate::models::{HealthMetricsResult, NutritionRecord, VitalsInput};
use crate::tools::nutrition::ListFoodsResponse;
use crate::tools::status::ChilemeStatus;
use crate::tools::{health, nutrition};

/// Body of POST /api/food/report
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodReportRequest {
    #[serde(default)]
    pub name: Value,
    #[serde(flatten)]
    pub options: ReportOptions,
}

fn rejection_message(rejection: &JsonRejection) -> String {
    format!("invalid request body: {}", rejection.body_text())
}

/// Pull a usable food name out of a request body field
fn name_field(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

pub async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::build_info::VERSION,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn food_nutrition(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResponse<NutritionRecord> {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiResponse::bad_request(rejection_message(&rejection)),
    };

    let Some(name) = name_field(&body["name"]) else {
        return ApiResponse::bad_request("name is required and must be a non-empty string");
    };

    match nutrition::resolve_nutrition(&state.resolver, name) {
        Ok(found) if found.found => ApiResponse::ok("nutrition data found", found.nutrition),
        Ok(_) => ApiResponse::ok("no nutrition data for this food", None),
        Err(e) => ApiResponse::bad_request(e),
    }
}

pub async fn health_calculate(
    payload: Result<Json<VitalsInput>, JsonRejection>,
) -> ApiResponse<HealthMetricsResult> {
    let Json(input) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiResponse::bad_request(rejection_message(&rejection)),
    };

    match health::calculate_health(&input) {
        Ok(result) => ApiResponse::ok("health metrics calculated", Some(result)),
        Err(e) => ApiResponse::bad_request(e.to_string()),
    }
}

pub async fn food_report(
    State(state): State<AppState>,
    payload: Result<Json<FoodReportRequest>, JsonRejection>,
) -> ApiResponse<FoodReport> {
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return ApiResponse::bad_request(rejection_message(&rejection)),
    };

    let Some(name) = name_field(&request.name) else {
        return ApiResponse::bad_request("name is required and must be a non-empty string");
    };

    match nutrition::food_report(&state.resolver, name, request.options) {
        Ok(response) if response.found => ApiResponse::ok("food report generated", response.report),
        Ok(_) => ApiResponse::ok("no nutrition data for this food", None),
        Err(e) => ApiResponse::bad_request(e),
    }
}

pub async fn list_foods(State(state): State<AppState>) -> ApiResponse<ListFoodsResponse> {
    ApiResponse::ok("food table", Some(nutrition::list_foods(&state.resolver)))
}

pub async fn service_status(State(state): State<AppState>) -> ApiResponse<ChilemeStatus> {
    ApiResponse::ok("service status", Some(state.status.get_status()))
}
