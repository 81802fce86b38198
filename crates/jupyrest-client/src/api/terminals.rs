//! Terminals API.

use crate::client::{ApiPath, JupyterClient};
use crate::error::Result;
use crate::types::{CreateTerminalRequest, Terminal};

/// Terminals API client.
pub struct TerminalsApi {
    client: JupyterClient,
}

impl TerminalsApi {
    pub(crate) fn new(client: JupyterClient) -> Self {
        Self { client }
    }

    /// List running terminals.
    pub async fn list(&self) -> Result<Vec<Terminal>> {
        self.client.get("terminals").await
    }

    /// Get a terminal by name.
    pub async fn get(&self, name: &str) -> Result<Terminal> {
        self.client.get(ApiPath::new("terminals").id(name)).await
    }

    /// Create a terminal.
    pub async fn create(&self, request: CreateTerminalRequest) -> Result<Terminal> {
        self.client.post("terminals", &request).await
    }

    /// Terminate a terminal.
    pub async fn delete(&self, name: &str) -> Result<()> {
        self.client.delete(ApiPath::new("terminals").id(name)).await
    }
}
