//! Chileme MCP server
//!
//! Serves the nutrition and health tools over stdio.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use chileme::build_info;
use chileme::mcp::ChilemeService;
use chileme::nutrition::NutritionResolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr; stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("chileme=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner("MCP server");
    eprintln!("Starting MCP server on stdio...");

    let resolver = NutritionResolver::builtin();
    tracing::info!(foods = resolver.foods().len(), "food table loaded");

    let service = ChilemeService::new(resolver);
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
