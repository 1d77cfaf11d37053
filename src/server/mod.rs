//! MCP server implementation for the contact form.
//!
//! This module provides the MCP protocol server that exposes contact form
//! validation and submission to AI assistants through the Model Context Protocol.

pub mod handlers;

pub use handlers::ContactFormMcpServer;

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the contact form MCP server with stdio transport.
///
/// Communicates via stdin/stdout using the MCP protocol and returns once the
/// client disconnects.
pub async fn run_server(server: ContactFormMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;

    service.waiting().await?;

    Ok(())
}
