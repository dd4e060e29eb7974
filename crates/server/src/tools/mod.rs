//! Tool definitions and execution for the store MCP server.
//!
//! Definitions (name, description, JSON Schema) live in per-domain modules;
//! [`ToolExecutor`] maps tool names to platform API calls through the gateway.
//! Every failure, validation or upstream, is reported to the caller as an
//! `{"error": ...}` value rather than a transport fault.

mod catalog;
mod coupons;
mod customers;
mod orders;
mod store;

pub use catalog::catalog_tools;
pub use coupons::coupon_tools;
pub use customers::customer_tools;
pub use orders::order_tools;
pub use store::store_tools;

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::instrument;

use crate::bigcommerce::{Gateway, GatewayError};
use crate::credentials::CredentialStore;

/// A callable tool exposed over MCP.
#[derive(Debug, Clone)]
pub struct Tool {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Get all tools (19 total) in the order they are presented to clients.
#[must_use]
pub fn all_tools() -> Vec<Tool> {
    let mut tools = Vec::with_capacity(19);
    // Credential resolution first: nothing else works until it runs.
    tools.extend(store_tools());
    tools.extend(catalog_tools());
    tools.extend(coupon_tools());
    tools.extend(order_tools());
    tools.extend(customer_tools());
    tools
}

/// Get a tool by name.
#[must_use]
pub fn get_tool_by_name(name: &str) -> Option<Tool> {
    all_tools().into_iter().find(|t| t.name == name)
}

/// Errors that can occur during tool execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Input failed presence or shape validation. Nothing was dispatched.
    #[error("{0}")]
    Validation(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The gateway call failed.
    #[error("{0}")]
    Gateway(#[from] GatewayError),

    /// An internal failure whose detail is logged, not surfaced.
    #[error("{0}")]
    Internal(String),

    /// No tool with the requested name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Executor for store tools.
///
/// Borrows the session's gateway and the shared credential store, and
/// dispatches by tool name.
pub struct ToolExecutor<'a> {
    gateway: &'a Gateway,
    credentials: &'a Arc<CredentialStore>,
}

impl<'a> ToolExecutor<'a> {
    /// Create a new tool executor.
    #[must_use]
    pub const fn new(gateway: &'a Gateway, credentials: &'a Arc<CredentialStore>) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    /// Execute a tool and return the projected result.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` if validation fails, the gateway call fails, or
    /// the tool name is unknown.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub async fn execute(&self, name: &str, input: &Value) -> Result<Value, ToolError> {
        match name {
            // Store
            "resolve_store_credentials" => self.resolve_store_credentials(input).await,

            // Catalog
            "create_product" => self.create_product(input).await,
            "get_product" => self.get_product(input).await,
            "find_product_id_by_sku" => self.find_product_id_by_sku(input).await,
            "update_product" => self.update_product(input).await,
            "create_product_variant" => self.create_product_variant(input).await,
            "create_variant_option" => self.create_variant_option(input).await,
            "get_product_variant_options" => self.get_product_variant_options(input).await,
            "get_product_variants" => self.get_product_variants(input).await,
            "get_product_inventory" => self.get_product_inventory(input).await,

            // Coupons
            "create_coupon" => self.create_coupon(input).await,

            // Orders
            "create_order" => self.create_order(input).await,
            "update_order" => self.update_order(input).await,
            "get_order_details" => self.get_order_details(input).await,
            "list_orders" => self.list_orders(input).await,
            "update_order_status" => self.update_order_status(input).await,
            "create_order_refund" => self.create_order_refund(input).await,

            // Customers
            "create_customer" => self.create_customer(input).await,
            "list_customers" => self.list_customers(input).await,

            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}

mod executor;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tools_count() {
        assert_eq!(all_tools().len(), 19);
    }

    #[test]
    fn test_tool_names_are_unique() {
        let tools = all_tools();
        let mut names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn test_get_tool_by_name() {
        assert!(get_tool_by_name("create_order").is_some());
        assert!(get_tool_by_name("resolve_store_credentials").is_some());
        assert!(get_tool_by_name("delete_everything").is_none());
    }

    #[test]
    fn test_schemas_are_objects() {
        for tool in all_tools() {
            let schema = tool.input_schema.as_object().expect("schema is an object");
            assert_eq!(
                schema.get("type").and_then(Value::as_str),
                Some("object"),
                "tool {} schema missing type",
                tool.name
            );
        }
    }
}
