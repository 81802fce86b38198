//! Sessions API.

use crate::client::{ApiPath, JupyterClient};
use crate::error::Result;
use crate::types::{CreateSessionRequest, KernelRef, Session, UpdateSessionRequest};

/// Sessions API client.
pub struct SessionsApi {
    client: JupyterClient,
}

impl SessionsApi {
    pub(crate) fn new(client: JupyterClient) -> Self {
        Self { client }
    }

    /// List all sessions.
    pub async fn list(&self) -> Result<Vec<Session>> {
        self.client.get("sessions").await
    }

    /// Get a session by ID.
    pub async fn get(&self, id: &str) -> Result<Session> {
        self.client.get(ApiPath::new("sessions").id(id)).await
    }

    /// Create a new session.
    pub async fn create(&self, request: CreateSessionRequest) -> Result<Session> {
        self.client.post("sessions", &request).await
    }

    /// Create a notebook session for a path, starting the named kernel.
    pub async fn create_for_path(&self, path: &str, kernel_name: &str) -> Result<Session> {
        self.create(CreateSessionRequest {
            path: path.to_string(),
            name: Some(path.to_string()),
            kind: Some("notebook".to_string()),
            kernel: Some(KernelRef {
                name: Some(kernel_name.to_string()),
                id: None,
            }),
        })
        .await
    }

    /// Update a session (rename, move, or switch kernel).
    pub async fn update(&self, id: &str, request: UpdateSessionRequest) -> Result<Session> {
        self.client.patch(ApiPath::new("sessions").id(id), &request).await
    }

    /// Delete a session and shut down its kernel.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(ApiPath::new("sessions").id(id)).await
    }
}
