//! MCP `ServerHandler` implementation for [`StoreService`].
//!
//! `list_tools` publishes the tool catalog with JSON schemas; `call_tool`
//! dispatches through [`ToolExecutor`]. Tool failures come back as results
//! with `is_error: true` and an `{"error": ...}` payload so the calling
//! agent can read and recover from them; protocol-level errors are reserved
//! for the transport itself.

use rmcp::ServerHandler;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, InitializeResult, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, Tool, ToolAnnotations,
};
use serde_json::{Map as JsonMap, Value, json};

use crate::service::StoreService;
use crate::tools::{ToolExecutor, all_tools};

const INSTRUCTIONS: &str = "Commerce store management tools. Call resolve_store_credentials \
    with a store ID before using any other tool.";

fn schema_map(schema: &Value) -> JsonMap<String, Value> {
    schema.as_object().cloned().unwrap_or_default()
}

impl ServerHandler for StoreService {
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.into()),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, rmcp::ErrorData>> + Send + '_
    {
        let tools = all_tools()
            .into_iter()
            .map(|tool| Tool {
                name: tool.name.into(),
                title: None,
                description: Some(tool.description.into()),
                input_schema: std::sync::Arc::new(schema_map(&tool.input_schema)),
                output_schema: None,
                annotations: Some(ToolAnnotations::default()),
                icons: None,
                meta: None,
            })
            .collect();

        std::future::ready(Ok(ListToolsResult {
            tools,
            next_cursor: None,
        }))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: rmcp::service::RequestContext<rmcp::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, rmcp::ErrorData>> + Send + '_
    {
        Box::pin(async move {
            let input = request
                .arguments
                .map_or(Value::Object(JsonMap::new()), Value::Object);

            let executor = ToolExecutor::new(self.gateway(), self.credentials());
            let result = match executor.execute(&request.name, &input).await {
                Ok(value) => CallToolResult {
                    content: vec![Content::text(value.to_string())],
                    structured_content: Some(value),
                    is_error: Some(false),
                    meta: None,
                },
                Err(e) => {
                    let message = e.to_string();
                    tracing::warn!(tool_name = %request.name, error = %message, "tool failed");
                    CallToolResult {
                        content: vec![Content::text(message.clone())],
                        structured_content: Some(json!({ "error": message })),
                        is_error: Some(true),
                        meta: None,
                    }
                }
            };
            Ok(result)
        })
    }
}
