//! Construction of the MCP server.

mod mocks;

use contact_form_server::observability::MetricsTracker;
use contact_form_server::submission::ContactSubmitter;
use contact_form_server::ContactFormMcpServer;
use mocks::MockSubmitter;
use rmcp::ServerHandler;
use std::sync::Arc;

fn server() -> ContactFormMcpServer {
    let submitter = Arc::new(MockSubmitter::new()) as Arc<dyn ContactSubmitter>;
    ContactFormMcpServer::new(submitter, MetricsTracker::new())
}

#[test]
fn test_server_info() {
    let info = server().get_info();
    assert_eq!(info.server_info.name, "contact-form-server");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("Contact form"));
}

#[test]
fn test_server_shares_metrics() {
    let metrics = MetricsTracker::new();
    let submitter = Arc::new(MockSubmitter::new()) as Arc<dyn ContactSubmitter>;
    let server = ContactFormMcpServer::new(submitter, metrics.clone());

    server.metrics().track_validation(2);
    assert_eq!(metrics.validations_total(), 1);
    assert_eq!(metrics.rejected_total(), 1);
}
