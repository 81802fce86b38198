//! Contents API.

use serde::{Serialize, Serializer};

use crate::client::{ApiPath, JupyterClient};
use crate::error::Result;
use crate::types::{
    Content, ContentFormat, ContentType, CreateContentRequest, RenameContentRequest,
    SaveContentRequest,
};

/// Query parameters for fetching a contents entry.
///
/// Only values that differ from the server defaults are sent.
#[derive(Debug, Clone, Serialize)]
pub struct ContentQuery {
    /// Expected type of the entry.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentType>,
    /// Requested payload format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ContentFormat>,
    /// Include the payload (`content=0` when false).
    #[serde(skip_serializing_if = "is_true", serialize_with = "as_flag")]
    pub content: bool,
    /// Ask the server for a content hash (`hash=1` when true).
    #[serde(skip_serializing_if = "std::ops::Not::not", serialize_with = "as_flag")]
    pub hash: bool,
}

impl Default for ContentQuery {
    fn default() -> Self {
        Self {
            kind: None,
            format: None,
            content: true,
            hash: false,
        }
    }
}

fn is_true(value: &bool) -> bool {
    *value
}

fn as_flag<S: Serializer>(value: &bool, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

/// Contents API client.
///
/// Paths are relative to the server root; an empty path is the root
/// directory.
pub struct ContentsApi {
    client: JupyterClient,
}

impl ContentsApi {
    pub(crate) fn new(client: JupyterClient) -> Self {
        Self { client }
    }

    fn path(path: &str) -> ApiPath {
        ApiPath::new("contents").nested(path)
    }

    /// Get a file, notebook or directory listing.
    pub async fn get(&self, path: &str) -> Result<Content> {
        self.client.get(Self::path(path)).await
    }

    /// Get an entry with query parameters.
    pub async fn get_with_query(&self, path: &str, query: &ContentQuery) -> Result<Content> {
        self.client.get_with_query(Self::path(path), query).await
    }

    /// Get an entry's metadata without its payload.
    pub async fn metadata(&self, path: &str) -> Result<Content> {
        let query = ContentQuery {
            content: false,
            ..Default::default()
        };
        self.get_with_query(path, &query).await
    }

    /// Create a new untitled entry (or a copy) inside the `parent` directory.
    pub async fn create(&self, parent: &str, request: CreateContentRequest) -> Result<Content> {
        self.client.post(Self::path(parent), &request).await
    }

    /// Create an untitled file with the given extension.
    pub async fn create_file(&self, parent: &str, ext: &str) -> Result<Content> {
        self.create(
            parent,
            CreateContentRequest {
                ext: Some(ext.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    /// Rename or move an entry to `new_path`.
    pub async fn rename(&self, path: &str, new_path: &str) -> Result<Content> {
        let request = RenameContentRequest {
            path: new_path.to_string(),
        };
        self.client.patch(Self::path(path), &request).await
    }

    /// Save an entry, replacing anything already at `path`.
    pub async fn save(&self, path: &str, request: SaveContentRequest) -> Result<Content> {
        self.client.put(Self::path(path), &request).await
    }

    /// Save a text file.
    pub async fn save_text(&self, path: &str, text: impl Into<String>) -> Result<Content> {
        self.save(path, SaveContentRequest::text(text)).await
    }

    /// Delete an entry.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.client.delete(Self::path(path)).await
    }
}
