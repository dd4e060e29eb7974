//! Order tools.

use serde_json::json;

use crate::bigcommerce::OrderStatus;

use super::Tool;

/// Get all order-related tools.
#[must_use]
pub fn order_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "create_order".to_string(),
            description: "Create a new order with products and customer details. \
                Requires a non-empty products array and a complete billing address \
                (first_name, last_name, street_1, city, state, zip, country, email). \
                If no shipping address is given, the billing address is used."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_data": {
                        "type": "object",
                        "description": "Order details. Required: products (array of {product_id, quantity}), billing_address. Optional: customer_id, status_id, shipping_addresses, payment_method."
                    }
                },
                "required": ["order_data"]
            }),
        },
        Tool {
            name: "update_order".to_string(),
            description: "Update an existing order. Updatable fields: status_id, \
                customer_id, products, billing_address, shipping_addresses, \
                staff_notes, customer_message, payment_method. Any other field is \
                rejected."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "integer",
                        "description": "The ID of the order to update"
                    },
                    "update_data": {
                        "type": "object",
                        "description": "Fields to update (at least one required)"
                    }
                },
                "required": ["order_id", "update_data"]
            }),
        },
        Tool {
            name: "get_order_details".to_string(),
            description: "Retrieve full details for an order, including its products \
                and shipping addresses."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "integer",
                        "description": "The ID of the order to retrieve"
                    }
                },
                "required": ["order_id"]
            }),
        },
        Tool {
            name: "list_orders".to_string(),
            description: "List orders with optional filters (status, created date \
                range, customer). total_count in the response is the number of \
                orders on the returned page, not the store-wide total."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "description": "Filter by status label (e.g. 'Awaiting Fulfillment', 'Shipped')"
                    },
                    "min_date_created": {
                        "type": "string",
                        "description": "ISO 8601 start date (e.g. '2025-05-18T00:00:00Z')"
                    },
                    "max_date_created": {
                        "type": "string",
                        "description": "ISO 8601 end date (e.g. '2025-05-18T23:59:59Z')"
                    },
                    "customer_id": {
                        "type": "integer",
                        "description": "Filter by customer ID"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Number of orders per page (default 50)"
                    },
                    "page": {
                        "type": "integer",
                        "description": "Page number (default 1)"
                    }
                }
            }),
        },
        Tool {
            name: "update_order_status".to_string(),
            description: format!(
                "Update the status of an order by ID. Valid statuses: {}.",
                OrderStatus::LABELS.join(", ")
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "integer",
                        "description": "The ID of the order to update"
                    },
                    "status": {
                        "type": "string",
                        "description": "The new status label (e.g. 'Shipped')"
                    }
                },
                "required": ["order_id", "status"]
            }),
        },
        Tool {
            name: "create_order_refund".to_string(),
            description: "Issue a full refund for an order to the original payment \
                method. Partial refunds are not supported."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "integer",
                        "description": "The ID of the order to refund"
                    },
                    "reason": {
                        "type": "string",
                        "description": "The reason for the refund (e.g. 'BROKEN-ITEM', 'Customer request')"
                    }
                },
                "required": ["order_id", "reason"]
            }),
        },
    ]
}
