//! Per-session MCP service state.

use std::sync::Arc;

use crate::bigcommerce::{Gateway, GatewayError};
use crate::credentials::CredentialStore;

/// One MCP session's worth of server state.
///
/// The transport constructs a fresh instance per session, so each session
/// starts with an empty credential slot and must call
/// `resolve_store_credentials` before any platform tool works. The
/// credential store is shared across sessions; the gateway is not.
#[derive(Debug, Clone)]
pub struct StoreService {
    gateway: Arc<Gateway>,
    credentials: Arc<CredentialStore>,
}

impl StoreService {
    /// Create a session service talking to the given API base.
    ///
    /// # Errors
    ///
    /// Returns error if the gateway's HTTP client fails to build.
    pub fn new(
        api_base: &str,
        credentials: Arc<CredentialStore>,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            gateway: Arc::new(Gateway::new(api_base)?),
            credentials,
        })
    }

    /// The session's platform gateway.
    #[must_use]
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// The shared tenant credential store.
    #[must_use]
    pub const fn credentials(&self) -> &Arc<CredentialStore> {
        &self.credentials
    }
}
