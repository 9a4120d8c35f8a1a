//! Chileme HTTP API server
//!
//! Serves the JSON routes the mobile front end calls.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use chileme::build_info;
use chileme::config::Config;
use chileme::http::{self, AppState};
use chileme::nutrition::NutritionResolver;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("chileme=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner("HTTP API");

    let config = Config::from_env()?;
    let app = http::router(AppState::new(NutritionResolver::builtin()));

    let listener = TcpListener::bind(config.http_addr).await?;
    tracing::info!(addr = %config.http_addr, "HTTP API listening");

    axum::serve(listener, app).await?;

    Ok(())
}
