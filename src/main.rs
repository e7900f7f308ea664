/// Portfolio API server
///
/// Serves the project gallery and contact form backend for the portfolio site:
/// - Project listing at /api/projects (and /api/projects/showcase)
/// - Contact form submission at /api/contacts
/// - Health check at /healthz

use portfolio_api::{config::Config, server::start_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from PORTFOLIO_* environment variables
    let config = Config::default();

    start_server(config).await?;

    Ok(())
}
