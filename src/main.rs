//! Contact Form Server - Main entry point
//!
//! Serves contact form validation and submission over the Model Context
//! Protocol (MCP) on stdio.

use anyhow::Result;
use contact_form_server::submission::ContactSubmitter;
use contact_form_server::{Config, ContactFormMcpServer, MetricsTracker, SimulatedSubmitter};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let submitter =
        Arc::new(SimulatedSubmitter::from_config(&config)) as Arc<dyn ContactSubmitter>;
    let metrics = MetricsTracker::new();

    let server = ContactFormMcpServer::new(submitter, metrics.clone());

    info!(
        "Contact form server initialized (submit delay: {} ms)",
        config.submit_delay_ms
    );

    info!("Starting MCP server with stdio transport");
    contact_form_server::server::run_server(server).await?;

    info!("{}", metrics.summary());
    info!("Contact form server shutdown complete");
    Ok(())
}
