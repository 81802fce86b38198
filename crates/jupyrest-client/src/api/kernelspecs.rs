//! Kernel specs API.

use crate::client::JupyterClient;
use crate::error::Result;
use crate::types::KernelSpecs;

/// Kernel specs API client.
pub struct KernelSpecsApi {
    client: JupyterClient,
}

impl KernelSpecsApi {
    pub(crate) fn new(client: JupyterClient) -> Self {
        Self { client }
    }

    /// List installed kernel specs and the default.
    pub async fn list(&self) -> Result<KernelSpecs> {
        self.client.get("kernelspecs").await
    }
}
