//! Coupon tools.

use serde_json::json;

use super::Tool;

/// Get all coupon-related tools.
#[must_use]
pub fn coupon_tools() -> Vec<Tool> {
    vec![Tool {
        name: "create_coupon".to_string(),
        description: "Create a per-item discount coupon. Name, code, and amount are \
            required. The coupon type is always per_item_discount."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "coupon_data": {
                    "type": "object",
                    "description": "Coupon details. Required: name (string), code (string), amount (number). Optional: min_purchase, applies_to, enabled, max_uses, expires (ISO 8601)."
                }
            },
            "required": ["coupon_data"]
        }),
    }]
}
