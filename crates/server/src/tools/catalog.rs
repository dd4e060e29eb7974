//! Catalog tools: products, variants, options, and inventory.

use serde_json::json;

use crate::bigcommerce::OptionType;

use super::Tool;

/// Get all catalog-related tools.
#[must_use]
pub fn catalog_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "create_product".to_string(),
            description: "Create a new product. Name, type, weight, and price are \
                required by the platform; ask the user for them if not provided. \
                Other fields are optional and default values will be used."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_data": {
                        "type": "object",
                        "description": "Product fields to create (name, type, weight, price, and any optional fields)"
                    }
                },
                "required": ["product_data"]
            }),
        },
        Tool {
            name: "get_product".to_string(),
            description: "Retrieve a product by its ID.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "integer",
                        "description": "The ID of the product to retrieve"
                    }
                },
                "required": ["product_id"]
            }),
        },
        Tool {
            name: "find_product_id_by_sku".to_string(),
            description: "Find a product ID (and variant ID, if applicable) by SKU."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "sku": {
                        "type": "string",
                        "description": "The SKU to search for"
                    }
                },
                "required": ["sku"]
            }),
        },
        Tool {
            name: "update_product".to_string(),
            description: "Update an existing product by ID. Only name, type, weight, \
                price, description, and availability may be changed; any other field \
                is rejected."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "integer",
                        "description": "The ID of the product to update"
                    },
                    "update_fields": {
                        "type": "object",
                        "description": "Fields to change (name, type, weight, price, description, availability)"
                    }
                },
                "required": ["product_id", "update_fields"]
            }),
        },
        Tool {
            name: "create_product_variant".to_string(),
            description: "Create a variant for a product with specific option values. \
                Product ID and SKU are required."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "integer",
                        "description": "The ID of the product to create the variant for"
                    },
                    "variant_data": {
                        "type": "object",
                        "description": "Variant details. Required: sku (string), option_values (array). Optional: price, weight, purchasing_disabled, inventory_level."
                    }
                },
                "required": ["product_id", "variant_data"]
            }),
        },
        Tool {
            name: "create_variant_option".to_string(),
            description: format!(
                "Create a variant option (like Color or Size) for a product. The option \
                 type must be one of: {}.",
                OptionType::NAMES.join(", ")
            ),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "integer",
                        "description": "The ID of the product to create the option for"
                    },
                    "option_data": {
                        "type": "object",
                        "description": "Option details. Required: display_name (string), type (string), option_values (array of {label, sort_order}). Optional: sort_order, config."
                    }
                },
                "required": ["product_id", "option_data"]
            }),
        },
        Tool {
            name: "get_product_variant_options".to_string(),
            description: "Get all variant options for a specific product.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "integer",
                        "description": "The ID of the product to get options for"
                    }
                },
                "required": ["product_id"]
            }),
        },
        Tool {
            name: "get_product_variants".to_string(),
            description: "Get all variants for a specific product.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "integer",
                        "description": "The ID of the product to get variants for"
                    }
                },
                "required": ["product_id"]
            }),
        },
        Tool {
            name: "get_product_inventory".to_string(),
            description: "Get the current inventory (stock level) for a product. For \
                variant-tracked products this sums inventory across variants and \
                includes a per-variant breakdown."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "integer",
                        "description": "The ID of the product to check"
                    }
                },
                "required": ["product_id"]
            }),
        },
    ]
}
