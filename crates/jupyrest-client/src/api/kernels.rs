//! Kernels API.

use crate::client::{ApiPath, JupyterClient};
use crate::error::Result;
use crate::types::{Kernel, StartKernelRequest};

/// Kernels API client.
pub struct KernelsApi {
    client: JupyterClient,
}

impl KernelsApi {
    pub(crate) fn new(client: JupyterClient) -> Self {
        Self { client }
    }

    /// List running kernels.
    pub async fn list(&self) -> Result<Vec<Kernel>> {
        self.client.get("kernels").await
    }

    /// Get a kernel by ID.
    pub async fn get(&self, id: &str) -> Result<Kernel> {
        self.client.get(ApiPath::new("kernels").id(id)).await
    }

    /// Start a kernel.
    pub async fn start(&self, request: StartKernelRequest) -> Result<Kernel> {
        self.client.post("kernels", &request).await
    }

    /// Start a kernel from the server's default kernel spec.
    pub async fn start_default(&self) -> Result<Kernel> {
        self.start(StartKernelRequest::default()).await
    }

    /// Shut down a kernel.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(ApiPath::new("kernels").id(id)).await
    }

    /// Interrupt a kernel.
    pub async fn interrupt(&self, id: &str) -> Result<()> {
        self.client
            .post_action(ApiPath::new("kernels").id(id).action("interrupt"))
            .await
    }

    /// Restart a kernel, keeping its ID.
    pub async fn restart(&self, id: &str) -> Result<Kernel> {
        self.client
            .post_empty(ApiPath::new("kernels").id(id).action("restart"))
            .await
    }
}
