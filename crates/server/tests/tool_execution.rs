//! Integration tests driving the tool executor against a mocked platform API.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use secrecy::SecretString;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use storebridge_server::bigcommerce::{Gateway, GatewayError};
use storebridge_server::config::DbConfig;
use storebridge_server::credentials::StoreCredentials;
use storebridge_server::tools::{ToolError, ToolExecutor};
use storebridge_server::CredentialStore;

const STORE_HASH: &str = "abc123";
const TOKEN: &str = "test-token";

fn credential_store() -> Arc<CredentialStore> {
    Arc::new(CredentialStore::new(DbConfig {
        host: "127.0.0.1".to_string(),
        port: 3306,
        user: "root".to_string(),
        password: SecretString::from("unused"),
        database: "storebridge".to_string(),
    }))
}

async fn resolved_gateway(server: &MockServer) -> Gateway {
    let gateway = Gateway::new(server.uri()).expect("build gateway");
    gateway
        .install_credentials(StoreCredentials::new(STORE_HASH, TOKEN))
        .await;
    gateway
}

async fn execute(gateway: &Gateway, name: &str, input: Value) -> Result<Value, ToolError> {
    let credentials = credential_store();
    let executor = ToolExecutor::new(gateway, &credentials);
    executor.execute(name, &input).await
}

#[tokio::test]
async fn tools_fail_fast_before_credential_resolution() {
    let gateway = Gateway::new("http://127.0.0.1:1").expect("build gateway");

    let result = execute(&gateway, "get_product", json!({"product_id": 42})).await;

    match result {
        Err(ToolError::Gateway(GatewayError::CredentialsNotResolved)) => {}
        other => panic!("expected CredentialsNotResolved, got {other:?}"),
    }
}

#[tokio::test]
async fn get_product_sends_auth_token_and_returns_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/products/42")))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 42, "name": "Mug"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "get_product", json!({"product_id": 42}))
        .await
        .expect("get_product");

    assert_eq!(result["data"]["name"], "Mug");
}

#[tokio::test]
async fn create_product_projects_id_and_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": 7, "name": "Mug", "price": 9.99, "sku": "MUG-1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_product",
        json!({"product_data": {"name": "Mug", "type": "physical", "price": 9.99, "weight": 1}}),
    )
    .await
    .expect("create_product");

    assert_eq!(result, json!({"id": 7, "name": "Mug"}));
}

#[tokio::test]
async fn find_product_id_by_sku_reports_missing_product() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/products")))
        .and(query_param("sku", "NOPE"))
        .and(query_param("include", "variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "find_product_id_by_sku", json!({"sku": "NOPE"})).await;

    match result {
        Err(ToolError::NotFound(msg)) => {
            assert_eq!(msg, "No product found with SKU 'NOPE'.");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn find_product_id_by_sku_matches_variant_case_insensitively() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 5,
                "variants": [
                    {"id": 50, "sku": "mug-red"},
                    {"id": 51, "sku": "MUG-BLUE"}
                ]
            }]
        })))
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "find_product_id_by_sku", json!({"sku": "mug-blue"}))
        .await
        .expect("find_product_id_by_sku");

    assert_eq!(result, json!({"product_id": 5, "variant_id": 51}));
}

#[tokio::test]
async fn update_product_rejects_disallowed_fields_without_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "update_product",
        json!({"product_id": 5, "update_fields": {"price": 10, "sku": "NEW-SKU"}}),
    )
    .await;

    match result {
        Err(ToolError::Validation(msg)) => {
            assert_eq!(msg, "Invalid fields provided: sku");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn create_product_variant_requires_sku_without_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_product_variant",
        json!({"product_id": 5, "variant_data": {"option_values": [{"id": 1}]}}),
    )
    .await;

    match result {
        Err(ToolError::Validation(msg)) => assert_eq!(msg, "SKU is required"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn create_variant_option_rejects_unknown_type() {
    let server = MockServer::start().await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_variant_option",
        json!({
            "product_id": 5,
            "option_data": {
                "display_name": "Color",
                "type": "checkbox",
                "option_values": [{"label": "Red"}]
            }
        }),
    )
    .await;

    match result {
        Err(ToolError::Validation(msg)) => {
            assert!(msg.starts_with("Invalid option type. Must be one of:"), "{msg}");
            assert!(msg.contains("swatch"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_product_inventory_sums_variant_levels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/catalog/products/9")))
        .and(query_param("include", "variants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 9,
                "name": "Mug",
                "inventory_tracking": "variant",
                "variants": [
                    {"id": 90, "sku": "MUG-S", "inventory_level": 3},
                    {"id": 91, "sku": "MUG-L", "inventory_level": 7},
                    {"id": 92, "sku": "MUG-XL", "inventory_level": null}
                ]
            }
        })))
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "get_product_inventory", json!({"product_id": 9}))
        .await
        .expect("get_product_inventory");

    assert_eq!(result["total_inventory"], 10);
    assert_eq!(result["inventory_tracking"], "variant");
    assert_eq!(result["variants"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_coupon_forces_per_item_discount_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/stores/{STORE_HASH}/v2/coupons")))
        .and(body_json(json!({
            "name": "Spring Sale",
            "code": "SPRING10",
            "amount": "10",
            "type": "per_item_discount"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 3,
                "name": "Spring Sale",
                "code": "SPRING10",
                "amount": "10",
                "type": "per_item_discount",
                "enabled": true,
                "expires": ""
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_coupon",
        json!({"coupon_data": {
            "name": "Spring Sale",
            "code": "SPRING10",
            "amount": "10",
            "type": "percentage_discount"
        }}),
    )
    .await
    .expect("create_coupon");

    assert_eq!(result["type"], "per_item_discount");
    assert_eq!(result["id"], 3);
}

#[tokio::test]
async fn create_order_defaults_shipping_to_billing() {
    let billing = json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "street_1": "1 Main St",
        "city": "Austin",
        "state": "Texas",
        "zip": "78701",
        "country": "United States",
        "email": "jane@example.com"
    });

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders")))
        .and(body_json(json!({
            "products": [{"product_id": 1, "quantity": 2}],
            "billing_address": billing,
            "shipping_addresses": [billing]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 100,
            "status": "Pending",
            "billing_address": billing,
            "total_inc_tax": "19.98",
            "items_total": 2,
            "payment_method": "Manual",
            "date_created": "Mon, 18 May 2025 00:00:00 +0000"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_order",
        json!({"order_data": {
            "products": [{"product_id": 1, "quantity": 2}],
            "billing_address": billing
        }}),
    )
    .await
    .expect("create_order");

    assert_eq!(result["id"], 100);
    assert_eq!(result["customer"]["email"], "jane@example.com");
    assert_eq!(result["total_amount"], "19.98");
}

#[tokio::test]
async fn create_order_reports_missing_billing_field() {
    let server = MockServer::start().await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_order",
        json!({"order_data": {
            "products": [{"product_id": 1, "quantity": 1}],
            "billing_address": {
                "first_name": "Jane",
                "last_name": "Doe",
                "street_1": "1 Main St",
                "city": "Austin",
                "state": "Texas",
                "zip": "78701",
                "country": "United States"
            }
        }}),
    )
    .await;

    match result {
        Err(ToolError::Validation(msg)) => {
            assert_eq!(msg, "billing_address.email is required");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_order_rejects_unknown_fields() {
    let server = MockServer::start().await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "update_order",
        json!({"order_id": 100, "update_data": {"status_id": 2, "coupon": "X"}}),
    )
    .await;

    match result {
        Err(ToolError::Validation(msg)) => {
            assert_eq!(msg, "Invalid fields provided: coupon");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn update_order_status_validates_label_before_dispatch() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "update_order_status",
        json!({"order_id": 100, "status": "shipped"}),
    )
    .await;

    match result {
        Err(ToolError::Validation(msg)) => assert_eq!(msg, "Invalid status: shipped"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn update_order_status_sends_numeric_status_id() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders/100/status")))
        .and(body_json(json!({"status_id": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 100,
            "status": "Shipped",
            "date_modified": "Mon, 18 May 2025 00:00:00 +0000",
            "customer_id": 4,
            "total_inc_tax": "19.98"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "update_order_status",
        json!({"order_id": 100, "status": "Shipped"}),
    )
    .await
    .expect("update_order_status");

    assert_eq!(result["status"], "Shipped");
    assert_eq!(result["customer_id"], 4);
}

#[tokio::test]
async fn list_orders_counts_returned_page_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders")))
        .and(query_param("limit", "2"))
        .and(query_param("page", "3"))
        .and(query_param("status", "Shipped"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "status": "Shipped", "date_created": "a", "customer_id": 1, "total_inc_tax": "1.00"},
            {"id": 2, "status": "Shipped", "date_created": "b", "customer_id": 2, "total_inc_tax": "2.00"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "list_orders",
        json!({"limit": 2, "page": 3, "status": "Shipped"}),
    )
    .await
    .expect("list_orders");

    assert_eq!(result["total_count"], 2);
    assert_eq!(result["page"], 3);
    assert_eq!(result["limit"], 2);
}

#[tokio::test]
async fn list_orders_treats_empty_body_as_no_orders() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders")))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "list_orders", json!({}))
        .await
        .expect("list_orders");

    assert_eq!(result["orders"], json!([]));
    assert_eq!(result["total_count"], 0);
}

#[tokio::test]
async fn get_order_details_merges_three_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders/100")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 100,
            "status": "Pending",
            "date_created": "a",
            "subtotal_ex_tax": "18.00",
            "total_inc_tax": "19.98",
            "customer_id": 4,
            "billing_address": {
                "first_name": "Jane", "last_name": "Doe", "email": "jane@example.com",
                "street_1": "1 Main St", "city": "Austin", "state": "Texas",
                "zip": "78701", "country": "United States"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders/100/products")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"product_id": 1, "name": "Mug", "sku": "MUG-1", "quantity": 2, "price_inc_tax": "9.99"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/stores/{STORE_HASH}/v2/orders/100/shipping_addresses"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"first_name": "Jane", "last_name": "Doe", "street_1": "1 Main St",
             "city": "Austin", "state": "Texas", "zip": "78701", "country": "United States"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "get_order_details", json!({"order_id": 100}))
        .await
        .expect("get_order_details");

    let order = &result["order"];
    assert_eq!(order["id"], 100);
    assert_eq!(order["billing_address"]["email"], "jane@example.com");
    assert_eq!(order["products"][0]["sku"], "MUG-1");
    assert_eq!(order["shipping_addresses"][0]["city"], "Austin");
}

#[tokio::test]
async fn get_order_details_aborts_on_product_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders/100")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 100})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v2/orders/100/products")))
        .respond_with(ResponseTemplate::new(404).set_body_string("order not found"))
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "get_order_details", json!({"order_id": 100})).await;

    match result {
        Err(ToolError::Gateway(GatewayError::Http { status, .. })) => assert_eq!(status, 404),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_order_refund_requests_original_payment_refund() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/stores/{STORE_HASH}/v2/orders/100/payment_actions/refund"
        )))
        .and(body_json(json!({
            "reason": "BROKEN-ITEM",
            "refund_to_original_payment": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 55,
            "order_id": 100,
            "transaction_type": "refund",
            "amount": "19.98",
            "status": "pending",
            "created_at": "2025-05-18T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_order_refund",
        json!({"order_id": 100, "reason": "BROKEN-ITEM"}),
    )
    .await
    .expect("create_order_refund");

    assert_eq!(result["order_id"], 100);
    assert_eq!(result["amount"], "19.98");
}

#[tokio::test]
async fn create_customer_rejects_oversized_batch_without_dispatch() {
    let server = MockServer::start().await;

    let customers: Vec<Value> = (0..11)
        .map(|i| {
            json!({
                "email": format!("c{i}@example.com"),
                "first_name": "A",
                "last_name": "B"
            })
        })
        .collect();

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "create_customer", json!({"customers": customers})).await;

    match result {
        Err(ToolError::Validation(msg)) => {
            assert_eq!(msg, "You can only create up to 10 customers in one call.");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_customer_rejects_empty_batch_without_dispatch() {
    let server = MockServer::start().await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "create_customer", json!({"customers": []})).await;

    match result {
        Err(ToolError::Validation(msg)) => {
            assert_eq!(msg, "Please provide a list of 1 to 10 customer objects.");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_customer_reports_position_of_invalid_entry() {
    let server = MockServer::start().await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "create_customer",
        json!({"customers": [
            {"email": "a@example.com", "first_name": "A", "last_name": "B"},
            {"email": "b@example.com", "first_name": "C"}
        ]}),
    )
    .await;

    match result {
        Err(ToolError::Validation(msg)) => {
            assert_eq!(msg, "Customer 2 is missing required fields: last_name");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn create_customer_posts_raw_batch_and_projects_response() {
    let batch = json!([
        {"email": "a@example.com", "first_name": "A", "last_name": "B"}
    ]);

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/stores/{STORE_HASH}/v3/customers")))
        .and(body_json(&batch))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 12,
                "email": "a@example.com",
                "first_name": "A",
                "last_name": "B",
                "company": "",
                "phone": "",
                "date_created": "2025-05-18T00:00:00Z",
                "address_count": 0,
                "attribute_count": 0
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(&gateway, "create_customer", json!({"customers": batch}))
        .await
        .expect("create_customer");

    assert_eq!(result["customers"][0]["id"], 12);
    assert_eq!(result["customers"][0]["email"], "a@example.com");
}

#[tokio::test]
async fn list_customers_uses_colon_date_filter_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/stores/{STORE_HASH}/v3/customers")))
        .and(query_param("page", "1"))
        .and(query_param("limit", "50"))
        .and(query_param("date_created:min", "2025-05-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 12, "email": "a@example.com", "first_name": "A", "last_name": "B"}],
            "meta": {"pagination": {"total": 1, "count": 1, "per_page": 50, "current_page": 1}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = resolved_gateway(&server).await;
    let result = execute(
        &gateway,
        "list_customers",
        json!({"date_created_min": "2025-05-01"}),
    )
    .await
    .expect("list_customers");

    assert_eq!(result["customers"][0]["id"], 12);
    assert_eq!(result["pagination"]["total"], 1);
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let gateway = Gateway::new("http://127.0.0.1:1").expect("build gateway");
    let result = execute(&gateway, "delete_everything", json!({})).await;

    match result {
        Err(ToolError::UnknownTool(name)) => assert_eq!(name, "delete_everything"),
        other => panic!("expected UnknownTool, got {other:?}"),
    }
}
