//! Typed async client for the Jupyter notebook server REST API.
//!
//! Every method issues exactly one HTTP request with the bearer token and
//! a JSON content type, rejects non-2xx answers and decodes the JSON body
//! into the matching type. Nothing is cached or retried.
//!
//! # Example
//!
//! ```no_run
//! use jupyrest_client::{JupyterClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = JupyterClient::builder()
//!     .base_url("http://localhost:8888/api")
//!     .auth_token("secret")
//!     .build()?;
//!
//! let version = client.server().version().await?;
//! println!("Server version: {}", version.version);
//!
//! // Write a file, then list the root directory
//! client.contents().save_text("hello.txt", "hello world").await?;
//! for entry in client.contents().get("").await?.children() {
//!     println!("{} ({})", entry.path, entry.kind);
//! }
//!
//! // Start a kernel and shut it down again
//! let kernel = client.kernels().start_default().await?;
//! client.kernels().delete(&kernel.id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Server**: version, status, identity
//! - **Contents**: get, create, rename, save, delete
//! - **Sessions**: list, create, get, update, delete
//! - **Kernel specs**: list
//! - **Kernels**: list, start, get, delete, interrupt, restart
//! - **Terminals**: list, create, get, delete

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use client::{ClientBuilder, JupyterClient, DEFAULT_BASE_URL, TOKEN_ENV_VAR};
pub use error::{Error, Result};
pub use types::*;

pub use api::ContentQuery;
