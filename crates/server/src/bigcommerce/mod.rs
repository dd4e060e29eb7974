//! BigCommerce API gateway.
//!
//! All platform traffic flows through [`Gateway`], which owns the HTTP client,
//! the per-session credential slot, and the uniform error shape tools rely on.
//!
//! # API Reference
//!
//! - Base URL: `https://api.bigcommerce.com/stores/{store_hash}`
//! - Authentication: access token via `X-Auth-Token` header
//! - Catalog and customers: v3 endpoints; orders and coupons: v2 endpoints

mod gateway;
mod types;

pub use gateway::Gateway;
pub use types::{OptionType, OrderStatus};

use thiserror::Error;

/// Errors that can occur when calling the platform API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No credentials installed for this session.
    #[error("No store credentials resolved. Call resolve_store_credentials first.")]
    CredentialsNotResolved,

    /// API returned a non-success status.
    #[error("HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    /// Request failed before a response was received.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Failed to parse the response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = GatewayError::Http {
            status: 404,
            body: "{\"title\":\"Not Found\"}".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error: 404 - {\"title\":\"Not Found\"}");
    }

    #[test]
    fn test_unresolved_error_display() {
        let err = GatewayError::CredentialsNotResolved;
        assert!(err.to_string().contains("resolve_store_credentials"));
    }
}
