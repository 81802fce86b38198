//! Request and response types for the notebook server API.
//!
//! These types mirror the server's REST contract. Fields the server treats
//! as free-form (kernel descriptors, identity, kernel spec bodies) stay as
//! `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// ─────────────────────────────────────────────────────────────────────────────
// Server
// ─────────────────────────────────────────────────────────────────────────────

/// Response of `GET /api`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    /// Server version string.
    pub version: String,
}

/// Response of `GET /api/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server start time (ISO 8601).
    #[serde(default)]
    pub started: String,
    /// Most recent activity across kernels and terminals (ISO 8601).
    #[serde(default)]
    pub last_activity: String,
    /// Number of open kernel connections.
    #[serde(default)]
    pub connections: u64,
    /// Number of running kernels.
    #[serde(default)]
    pub kernels: u64,
}

/// Response of `GET /api/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Identity model of the authenticated user.
    pub identity: Value,
    /// Granted permissions, only present when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Value>,
}

impl MeResponse {
    /// Username from the identity model, if present.
    pub fn username(&self) -> Option<&str> {
        self.identity.get("username").and_then(Value::as_str)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Contents
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of a contents entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Directory,
    File,
    Notebook,
}

impl ContentType {
    /// Wire name of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Directory => "directory",
            ContentType::File => "file",
            ContentType::Notebook => "notebook",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encoding of the `content` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Json,
    Text,
    Base64,
}

/// Payload of a contents entry.
///
/// Directories list their children, text and base64 files carry a string,
/// notebooks carry the notebook document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentBody {
    Directory(Vec<Content>),
    Text(String),
    Notebook(Value),
}

/// A file, notebook or directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Basename of the entry.
    pub name: String,
    /// Path relative to the server root.
    pub path: String,
    /// Creation time (ISO 8601).
    #[serde(default)]
    pub created: Option<String>,
    /// Last modification time (ISO 8601).
    #[serde(default)]
    pub last_modified: Option<String>,
    /// Payload, `None` when fetched with `content=0`.
    #[serde(default)]
    pub content: Option<ContentBody>,
    /// Format of the payload.
    #[serde(default)]
    pub format: Option<ContentFormat>,
    #[serde(default)]
    pub mimetype: Option<String>,
    /// Size in bytes (files only).
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default, alias = "writeable")]
    pub writable: bool,
    /// Content hash, when requested with `hash=1`.
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default)]
    pub hash_algorithm: Option<String>,
}

impl Content {
    /// Whether this entry is a directory.
    pub fn is_directory(&self) -> bool {
        self.kind == ContentType::Directory
    }

    /// Children of a directory listing; empty for anything else.
    pub fn children(&self) -> &[Content] {
        match &self.content {
            Some(ContentBody::Directory(children)) => children,
            _ => &[],
        }
    }

    /// Text payload of a file.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Some(ContentBody::Text(text)) => Some(text),
            _ => None,
        }
    }
}

/// Request body for `POST /api/contents/{path}`.
///
/// An empty request creates an untitled file in the parent directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContentRequest {
    /// Path of an existing file to copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copy_from: Option<String>,
    /// Extension of the new file, e.g. `.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentType>,
}

/// Request body for `PATCH /api/contents/{path}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameContentRequest {
    /// New path of the entry.
    pub path: String,
}

/// Request body for `PUT /api/contents/{path}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveContentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default)]
    pub format: Option<ContentFormat>,
    #[serde(default)]
    pub content: Option<Value>,
}

impl SaveContentRequest {
    /// A text file.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            name: None,
            path: None,
            kind: ContentType::File,
            format: Some(ContentFormat::Text),
            content: Some(Value::String(content.into())),
        }
    }

    /// A binary file, already base64 encoded.
    pub fn base64(encoded: impl Into<String>) -> Self {
        Self {
            format: Some(ContentFormat::Base64),
            ..Self::text(encoded)
        }
    }

    /// A notebook document.
    pub fn notebook(document: Value) -> Self {
        Self {
            name: None,
            path: None,
            kind: ContentType::Notebook,
            format: Some(ContentFormat::Json),
            content: Some(document),
        }
    }

    /// An empty directory.
    pub fn directory() -> Self {
        Self {
            name: None,
            path: None,
            kind: ContentType::Directory,
            format: None,
            content: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Sessions
// ─────────────────────────────────────────────────────────────────────────────

/// A running session binding a kernel to a path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session ID.
    pub id: String,
    /// Kernel model of the session.
    #[serde(default)]
    pub kernel: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// Session type (notebook, console, file).
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Session {
    /// ID of the kernel bound to this session.
    pub fn kernel_id(&self) -> Option<&str> {
        self.kernel.as_ref()?.get("id")?.as_str()
    }
}

/// Kernel selector used when creating or updating a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KernelRef {
    /// Kernel spec to start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Existing kernel to attach to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Request to create a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<KernelRef>,
}

/// Request to update a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Switch the session to another kernel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernel: Option<KernelRef>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernel specs
// ─────────────────────────────────────────────────────────────────────────────

/// Descriptor of an installable kernel type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelSpec {
    pub name: String,
    /// Contents of the kernel.json file.
    pub spec: Value,
    /// Resource name to URL path (logos, kernel.js).
    #[serde(default)]
    pub resources: HashMap<String, String>,
}

impl KernelSpec {
    /// Display name from kernel.json, if present.
    pub fn display_name(&self) -> Option<&str> {
        self.spec.get("display_name").and_then(Value::as_str)
    }
}

/// Response of `GET /api/kernelspecs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelSpecs {
    /// Name of the default kernel spec.
    pub default: String,
    /// Available kernel specs keyed by name.
    pub kernelspecs: HashMap<String, KernelSpec>,
}

impl KernelSpecs {
    /// The default kernel spec, if it is listed.
    pub fn default_spec(&self) -> Option<&KernelSpec> {
        self.kernelspecs.get(&self.default)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernels
// ─────────────────────────────────────────────────────────────────────────────

/// A running kernel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kernel {
    /// Kernel ID.
    pub id: String,
    /// Kernel spec name.
    pub name: String,
    /// Last activity (ISO 8601).
    #[serde(default)]
    pub last_activity: Option<String>,
    /// Execution state (starting, idle, busy, ...).
    #[serde(default)]
    pub execution_state: Option<String>,
    /// Number of open connections.
    #[serde(default)]
    pub connections: u64,
}

/// Request to start a kernel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartKernelRequest {
    /// Kernel spec name; the server default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Working directory for the kernel, relative to the server root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Terminals
// ─────────────────────────────────────────────────────────────────────────────

/// A running terminal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Terminal {
    pub name: String,
    #[serde(default)]
    pub last_activity: Option<String>,
}

/// Request to create a terminal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTerminalRequest {
    /// Working directory for the shell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
}
