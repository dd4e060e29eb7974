//! MCP client session against the storebridge tool server.

use std::time::Duration;

use anyhow::{Context, Result};
use rmcp::model::CallToolRequestParam;
use rmcp::service::{RoleClient, RunningService, ServiceExt as _};
use rmcp::transport::StreamableHttpClientTransport;
use serde_json::Value;

use crate::claude::Tool;

/// Maximum amount of time to wait for a tool invocation.
const TOOL_INVOCATION_TIMEOUT: Duration = Duration::from_secs(30);

/// The outcome of one tool invocation, as text for the model.
#[derive(Debug)]
pub struct ToolOutcome {
    /// Result payload, JSON-encoded.
    pub content: String,
    /// Whether the server flagged the call as failed.
    pub is_error: bool,
}

/// A connected MCP session exposing the server's tools.
pub struct McpSession {
    service: RunningService<RoleClient, ()>,
}

impl McpSession {
    /// Connect to the MCP server over streamable HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport or handshake fails.
    pub async fn connect(url: &str) -> Result<Self> {
        let transport = StreamableHttpClientTransport::from_uri(url.to_string());
        let service = ()
            .serve(transport)
            .await
            .with_context(|| format!("failed to connect to MCP server at {url}"))?;

        Ok(Self { service })
    }

    /// Fetch the server's tool catalog in Claude tool format.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing request fails.
    pub async fn list_tools(&self) -> Result<Vec<Tool>> {
        let tools = self
            .service
            .list_all_tools()
            .await
            .context("failed to list MCP tools")?;

        Ok(tools
            .into_iter()
            .map(|tool| Tool {
                name: tool.name.to_string(),
                description: tool
                    .description
                    .map(|d| d.to_string())
                    .unwrap_or_default(),
                input_schema: Value::Object((*tool.input_schema).clone()),
            })
            .collect())
    }

    /// Invoke a tool by name with a JSON object input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call times out or the transport fails. Tool
    /// failures reported by the server come back as `ToolOutcome` values with
    /// `is_error` set, not as transport errors.
    pub async fn call_tool(&self, name: &str, input: Value) -> Result<ToolOutcome> {
        let arguments = match input {
            Value::Object(map) => Some(map),
            Value::Null => None,
            other => anyhow::bail!("tool input must be a JSON object, got {other}"),
        };

        let request = CallToolRequestParam {
            name: name.to_string().into(),
            arguments,
        };

        let result = tokio::time::timeout(
            TOOL_INVOCATION_TIMEOUT,
            self.service.call_tool(request),
        )
        .await
        .with_context(|| format!("tool '{name}' timed out"))?
        .with_context(|| format!("tool '{name}' failed"))?;

        // Prefer the structured payload; fall back to concatenated text.
        let content = result.structured_content.map_or_else(
            || {
                result
                    .content
                    .iter()
                    .filter_map(|c| c.as_text().map(|t| t.text.clone()))
                    .collect::<Vec<_>>()
                    .join("\n")
            },
            |value| value.to_string(),
        );

        Ok(ToolOutcome {
            content,
            is_error: result.is_error.unwrap_or(false),
        })
    }

    /// Shut down the session.
    ///
    /// # Errors
    ///
    /// Returns an error if cancellation fails.
    pub async fn close(self) -> Result<()> {
        self.service.cancel().await.context("failed to close MCP session")?;
        Ok(())
    }
}
