//! Customer tools.

use serde_json::json;

use super::Tool;

/// Get all customer-related tools.
#[must_use]
pub fn customer_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "create_customer".to_string(),
            description: "Create between 1 and 10 customers in one call. Each customer \
                requires email, first_name, and last_name. Addresses require \
                first_name, last_name, address1, city, and country_code; attributes \
                require attribute_id and attribute_value. Any invalid entry rejects \
                the whole batch."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "customers": {
                        "type": "array",
                        "description": "List of 1 to 10 customer objects",
                        "items": {
                            "type": "object",
                            "properties": {
                                "email": { "type": "string" },
                                "first_name": { "type": "string" },
                                "last_name": { "type": "string" },
                                "company": { "type": "string" },
                                "phone": { "type": "string" },
                                "notes": { "type": "string" },
                                "addresses": { "type": "array" },
                                "attributes": { "type": "array" }
                            },
                            "required": ["email", "first_name", "last_name"]
                        },
                        "minItems": 1,
                        "maxItems": 10
                    }
                },
                "required": ["customers"]
            }),
        },
        Tool {
            name: "list_customers".to_string(),
            description: "List customers with pagination and optional created-date \
                filters. Returns customer summaries and the platform's pagination \
                metadata."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "page": {
                        "type": "integer",
                        "description": "Page number (default 1)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Customers per page (default 50, max 250)"
                    },
                    "date_created_min": {
                        "type": "string",
                        "description": "Only customers created after this date (ISO 8601)"
                    },
                    "date_created_max": {
                        "type": "string",
                        "description": "Only customers created before this date (ISO 8601)"
                    }
                }
            }),
        },
    ]
}
