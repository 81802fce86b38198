//! Server API: version, status and identity.

use crate::client::JupyterClient;
use crate::error::Result;
use crate::types::{MeResponse, StatusResponse, VersionResponse};

/// Query parameters for `GET /api/me`.
#[derive(Debug, serde::Serialize)]
struct MeQuery {
    /// JSON-encoded map of resource name to requested actions.
    permissions: String,
}

/// Server API client.
pub struct ServerApi {
    client: JupyterClient,
}

impl ServerApi {
    pub(crate) fn new(client: JupyterClient) -> Self {
        Self { client }
    }

    /// Get the server version.
    pub async fn version(&self) -> Result<VersionResponse> {
        self.client.get("").await
    }

    /// Get server activity and load.
    pub async fn status(&self) -> Result<StatusResponse> {
        self.client.get("status").await
    }

    /// Get the identity of the token's owner.
    pub async fn me(&self) -> Result<MeResponse> {
        self.client.get("me").await
    }

    /// Get the identity and check which of the requested actions are granted.
    ///
    /// `permissions` maps a resource (e.g. `contents`) to actions
    /// (e.g. `["read", "write"]`).
    pub async fn me_with_permissions(
        &self,
        permissions: &std::collections::HashMap<String, Vec<String>>,
    ) -> Result<MeResponse> {
        let query = MeQuery {
            permissions: serde_json::to_string(permissions)?,
        };
        self.client.get_with_query("me", &query).await
    }

    /// Simple connectivity check - returns true if the server answers.
    pub async fn is_reachable(&self) -> bool {
        self.version().await.is_ok()
    }
}
