//! Store credential tools.

use serde_json::json;

use super::Tool;

/// Get store-level tools.
#[must_use]
pub fn store_tools() -> Vec<Tool> {
    vec![Tool {
        name: "resolve_store_credentials".to_string(),
        description: "Look up the store hash and API access token for a store by its \
            numeric ID and install them for this session. Must be called before any \
            other tool. Ask the user for their store ID."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "store_id": {
                    "type": "integer",
                    "description": "The numeric ID of the store"
                }
            },
            "required": ["store_id"]
        }),
    }]
}
