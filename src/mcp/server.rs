//! Chileme MCP Server Implementation
//!
//! Exposes nutrition lookup, food reports, and health metrics as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::health::ReportOptions;
use crate::models::{NumericField, VitalsInput};
use crate::nutrition::NutritionResolver;
use crate::tools::status::StatusTracker;
use crate::tools::{health, nutrition};

/// Chileme MCP Service
#[derive(Clone)]
pub struct ChilemeService {
    status_tracker: Arc<StatusTracker>,
    resolver: NutritionResolver,
    tool_router: ToolRouter<ChilemeService>,
}

impl ChilemeService {
    pub fn new(resolver: NutritionResolver) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(resolver)),
            resolver,
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for ChilemeService {
    fn default() -> Self {
        Self::new(NutritionResolver::builtin())
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResolveNutritionParams {
    /// Food name as recognized or typed, e.g. "红苹果" or "洋芋"
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodReportParams {
    /// Food name as recognized or typed
    pub name: String,
    /// Portion eaten in grams (default 100)
    pub grams: Option<f64>,
    /// Recognizer confidence, 0-100
    pub confidence: Option<f64>,
    /// User's daily calorie estimate from calculate_health (default 2000)
    pub daily_calories: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateHealthParams {
    /// Age in whole years (10-100)
    pub age: f64,
    /// male/female or 男/女
    pub gender: String,
    /// Weight in kilograms
    pub weight: f64,
    /// Height in meters (e.g. 1.75)
    pub height: f64,
    /// sedentary, light, moderate, active, or veryActive (default sedentary)
    pub activity_level: Option<String>,
}

impl From<CalculateHealthParams> for VitalsInput {
    fn from(p: CalculateHealthParams) -> Self {
        VitalsInput {
            age: Some(NumericField::Number(p.age)),
            gender: Some(p.gender.into()),
            weight: Some(NumericField::Number(p.weight)),
            height: Some(NumericField::Number(p.height)),
            activity_level: p.activity_level.map(Into::into),
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl ChilemeService {
    // --- Status ---

    #[tool(description = "Get the current status of the Chileme service including build info, food table size, and process information")]
    fn service_status(&self) -> Result<CallToolResult, McpError> {
        to_json(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for looking up food nutrition and calculating health metrics. Call this when unsure how to use the Chileme tools.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Nutrition ---

    #[tool(description = "Look up per-100g nutrition (calories, protein, carbs, fat) for a food name. Understands common aliases and partial names; found=false means no data.")]
    fn resolve_nutrition(&self, Parameters(p): Parameters<ResolveNutritionParams>) -> Result<CallToolResult, McpError> {
        let result = nutrition::resolve_nutrition(&self.resolver, &p.name)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "List every food in the built-in nutrition table with per-100g values")]
    fn list_foods(&self) -> Result<CallToolResult, McpError> {
        to_json(&nutrition::list_foods(&self.resolver))
    }

    #[tool(description = "Build a food report: health score, level, advice, and share of daily calories for a portion of a food")]
    fn food_report(&self, Parameters(p): Parameters<FoodReportParams>) -> Result<CallToolResult, McpError> {
        let options = ReportOptions {
            grams: p.grams,
            confidence: p.confidence,
            daily_calories: p.daily_calories,
        };
        let result = nutrition::food_report(&self.resolver, &p.name, options)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    // --- Health ---

    #[tool(description = "Calculate BMI, BMI category, BMR (Mifflin-St Jeor) and daily calorie needs from age, gender, weight (kg), height (m), and activity level")]
    fn calculate_health(&self, Parameters(p): Parameters<CalculateHealthParams>) -> Result<CallToolResult, McpError> {
        let input = VitalsInput::from(p);
        let result = health::calculate_health(&input)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for ChilemeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "chileme".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Chileme (吃了么)".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Chileme (吃了么) - food nutrition lookup and health metrics. \
                 Call usage_instructions first if unsure. \
                 Food: resolve_nutrition, list_foods, food_report. \
                 Health: calculate_health (height in meters). \
                 Status: service_status."
                    .into(),
            ),
        }
    }
}
