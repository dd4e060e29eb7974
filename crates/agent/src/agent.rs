//! Conversation loop wiring Claude tool use to the MCP tool server.

use anyhow::{Result, anyhow};

use crate::claude::{ClaudeClient, ContentBlock, Message, StopReason, Tool};
use crate::mcp::McpSession;

/// Upper bound on tool rounds within a single user turn.
const MAX_TOOL_ROUNDS: usize = 10;

const SYSTEM_PROMPT: &str = "\
You are a commerce store assistant for catalog, order, coupon, and customer management.

Before any other tool can work, you must initialize store credentials:
- If the user has not provided a store ID, ask: \"Please provide your store ID to continue.\"
- Once you have the store ID, call resolve_store_credentials with it.

General rules:
- When a tool needs a field the user has not given (an order ID, a product ID, a SKU, \
a customer's email), ask for it directly before calling the tool.
- After a successful tool call, present the key fields from the result in a clear, \
readable summary rather than raw JSON.
- If a tool returns an error, relay it politely and suggest what the user should check \
(for example the order ID, the status label, or missing required fields).

For order details, summarize: order ID, status, date created, subtotal (excluding tax), \
total (including tax), customer ID, billing address, shipping addresses, and products.

For order listings, summarize each order's ID, status, date created, customer ID, and \
total including tax. Offer to fetch full details for a specific order.

For inventory checks, summarize the product ID, name, inventory tracking type, and the \
inventory level (or the per-variant breakdown when tracking is per variant).

For order status updates, confirm the order ID, updated status, date modified, customer \
ID, and total including tax. Valid status labels are listed in the tool description.

For refunds, confirm the refund ID, order ID, transaction type, amount, refund status, \
and created timestamp. Refunds are always issued in full to the original payment method.

For customer listings, note that the API cannot filter by name or email; offer date \
range filters and pagination instead. Summarize each customer's ID, email, name, \
company, phone, and date created.

For customer creation, collect email, first name, and last name (asking for each \
missing one directly), then offer optional fields such as company, phone, notes, \
addresses, and attributes. Up to 10 customers can be created in one call.

If the user asks for something unrelated to store management, explain that you only \
support the catalog, order, coupon, and customer operations listed in your tools.

Always provide clear, concise, and actionable answers, and offer to help with the next \
task.";

/// Store assistant driving a Claude tool-use loop against the MCP server.
pub struct Agent {
    claude: ClaudeClient,
    mcp: McpSession,
    tools: Vec<Tool>,
    messages: Vec<Message>,
}

impl Agent {
    /// Create an agent, fetching the tool catalog from the MCP server.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool listing fails.
    pub async fn new(claude: ClaudeClient, mcp: McpSession) -> Result<Self> {
        let tools = mcp.list_tools().await?;
        tracing::info!(tool_count = tools.len(), "loaded MCP tool catalog");

        Ok(Self {
            claude,
            mcp,
            tools,
            messages: Vec::new(),
        })
    }

    /// Handle one user turn, running tool calls until Claude produces a
    /// final text answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the Claude API fails, the MCP transport fails, or
    /// the tool round limit is exceeded.
    pub async fn handle(&mut self, user_input: &str) -> Result<String> {
        self.messages.push(Message::user(user_input));

        for _ in 0..MAX_TOOL_ROUNDS {
            let response = self
                .claude
                .chat(
                    self.messages.clone(),
                    Some(SYSTEM_PROMPT.to_string()),
                    Some(self.tools.clone()),
                )
                .await?;

            let text: Vec<&str> = response
                .content
                .iter()
                .filter_map(|block| match block {
                    ContentBlock::Text { text } => Some(text.as_str()),
                    _ => None,
                })
                .collect();
            let text = text.join("\n");

            self.messages
                .push(Message::assistant(response.content.clone()));

            if response.stop_reason != Some(StopReason::ToolUse) {
                return Ok(text);
            }

            let mut results = Vec::new();
            for block in &response.content {
                if let ContentBlock::ToolUse { id, name, input } = block {
                    tracing::info!(tool_name = %name, "executing tool");
                    let outcome = self.mcp.call_tool(name, input.clone()).await?;
                    results.push(ContentBlock::ToolResult {
                        tool_use_id: id.clone(),
                        content: outcome.content,
                        is_error: outcome.is_error.then_some(true),
                    });
                }
            }
            self.messages.push(Message::tool_results(results));
        }

        Err(anyhow!(
            "tool round limit reached without a final answer"
        ))
    }

    /// Shut down the underlying MCP session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session fails to close cleanly.
    pub async fn shutdown(self) -> Result<()> {
        self.mcp.close().await
    }
}
