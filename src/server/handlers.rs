//! MCP tool handlers for the contact form server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::domain::{is_valid_email, is_valid_phone};
use crate::models::{ContactRecord, ErrorRecord};
use crate::observability::{MetricsTracker, Timer};
use crate::submission::{ContactForm, ContactSubmitter, SubmissionReceipt, SubmitOutcome};
use crate::validation::validate;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes contact form validation and submission.
#[derive(Clone)]
pub struct ContactFormMcpServer {
    submitter: Arc<dyn ContactSubmitter>,
    metrics: MetricsTracker,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for ContactFormMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "contact-form-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Contact form server - validates name, email, optional phone, subject and message, and submits valid inquiries.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FormatCheckParams {
    value: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn json_result(value: &serde_json::Value) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).map_err(to_mcp_error)?,
    )]))
}

/// Response body of `validate_contact_form`.
pub fn validation_response(errors: &ErrorRecord) -> serde_json::Value {
    serde_json::json!({
        "valid": errors.is_empty(),
        "errors": errors,
    })
}

/// Response body of `submit_contact_form` for a rejected record.
pub fn rejected_response(errors: &ErrorRecord) -> serde_json::Value {
    serde_json::json!({
        "submitted": false,
        "errors": errors,
    })
}

/// Response body of `submit_contact_form` for an accepted record.
pub fn accepted_response(receipt: &SubmissionReceipt) -> serde_json::Value {
    serde_json::json!({
        "submitted": true,
        "submitted_at": receipt.submitted_at.to_rfc3339(),
    })
}

/// Response body of the format check tools.
pub fn format_check_response(value: &str, valid: bool) -> serde_json::Value {
    serde_json::json!({
        "value": value,
        "valid": valid,
    })
}

#[tool_router]
impl ContactFormMcpServer {
    /// Create a new contact form MCP server.
    pub fn new(submitter: Arc<dyn ContactSubmitter>, metrics: MetricsTracker) -> Self {
        Self {
            submitter,
            metrics,
            tool_router: Self::tool_router(),
        }
    }

    /// Metrics shared with this server.
    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Validate a contact record without submitting it.
    #[tool(
        description = "Validate a contact form record (name, email, optional phone, subject, message). Returns whether it is valid and a map of field name to error message for every invalid field."
    )]
    async fn validate_contact_form(
        &self,
        params: Parameters<ContactRecord>,
    ) -> Result<CallToolResult, McpError> {
        let record = params.0;

        let errors = validate(&record);
        self.metrics.track_validation(errors.len());

        json_result(&validation_response(&errors))
    }

    /// Validate and submit a contact record.
    #[tool(
        description = "Validate a contact form record and, if it is valid, submit it. Invalid records are not submitted; their field errors are returned instead."
    )]
    async fn submit_contact_form(
        &self,
        params: Parameters<ContactRecord>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: submit_contact_form called");

        let mut form = ContactForm::new(self.submitter.clone());
        form.set_record(params.0);

        let timer = Timer::new("submit_contact_form");
        match form.submit().await {
            Ok(SubmitOutcome::Rejected(errors)) => {
                self.metrics.track_validation(errors.len());
                json_result(&rejected_response(&errors))
            }
            Ok(SubmitOutcome::Accepted(receipt)) => {
                self.metrics.track_validation(0);
                self.metrics
                    .track_submission(timer.finish_with_status(true), true);
                json_result(&accepted_response(&receipt))
            }
            Err(e) => {
                tracing::error!("Failed to submit contact form: {:?}", e);
                self.metrics.track_validation(0);
                self.metrics
                    .track_submission(timer.finish_with_status(false), false);
                Err(to_mcp_error(e.user_message()))
            }
        }
    }

    /// Check a value against the email format rule.
    #[tool(
        description = "Check whether a value has the form local-part@domain.tld accepted by the contact form"
    )]
    async fn check_email_format(
        &self,
        params: Parameters<FormatCheckParams>,
    ) -> Result<CallToolResult, McpError> {
        let value = params.0.value;
        json_result(&format_check_response(&value, is_valid_email(&value)))
    }

    /// Check a value against the phone format rule.
    #[tool(
        description = "Check whether a value is 10 to 15 characters of digits and hyphens, as accepted by the contact form"
    )]
    async fn check_phone_format(
        &self,
        params: Parameters<FormatCheckParams>,
    ) -> Result<CallToolResult, McpError> {
        let value = params.0.value;
        json_result(&format_check_response(&value, is_valid_phone(&value)))
    }
}
