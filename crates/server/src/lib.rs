//! Commerce store MCP server.
//!
//! Exposes store management tools (catalog, coupons, orders, customers) to
//! MCP clients over streamable HTTP. Tenant API credentials are looked up in
//! MySQL per session via the `resolve_store_credentials` tool; all platform
//! traffic goes through a single REST [`bigcommerce::Gateway`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bigcommerce;
pub mod config;
pub mod credentials;
pub mod handler;
pub mod http_transport;
pub mod service;
pub mod tools;

pub use config::{DbConfig, ServerConfig};
pub use credentials::{CredentialStore, StoreCredentials};
pub use service::StoreService;
