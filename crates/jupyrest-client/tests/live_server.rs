//! Tests against a running notebook server.
//!
//! These need a server reachable at `JUPYTERLAB_API_URL` (default
//! `http://localhost:8888/api`) and a token in `JUPYTERLAB_API_TOKEN`, and
//! only run when the `integration-tests` feature is enabled.
//!
//! Run with: `cargo test -p jupyrest-client --features integration-tests --test live_server`

#![cfg(feature = "integration-tests")]

use jupyrest_client::{
    ContentType, CreateTerminalRequest, JupyterClient, DEFAULT_BASE_URL, TOKEN_ENV_VAR,
};

fn client() -> JupyterClient {
    let base_url =
        std::env::var("JUPYTERLAB_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    JupyterClient::builder()
        .base_url(base_url)
        .token_env(TOKEN_ENV_VAR)
        .build()
        .expect("JUPYTERLAB_API_TOKEN must be set for live tests")
}

// ── Server ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_version_looks_like_semver() {
    let version = client().server().version().await.unwrap().version;
    let parts: Vec<_> = version.split('.').take(3).collect();
    assert_eq!(parts.len(), 3, "unexpected version {version}");
    assert!(parts[0].parse::<u32>().is_ok());
    assert!(parts[1].parse::<u32>().is_ok());
}

#[tokio::test]
async fn test_me_returns_identity() {
    let me = client().server().me().await.unwrap();
    assert!(me.identity.is_object());
}

// ── Contents ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_is_directory() {
    let root = client().contents().get("").await.unwrap();
    assert_eq!(root.kind, ContentType::Directory);
}

#[tokio::test]
async fn test_create_rename_delete() {
    let contents = client().contents();

    let created = contents.create_file("", ".test.txt").await.unwrap();
    assert!(created.name.ends_with(".test.txt"), "got {}", created.name);

    let target = format!("renamed-{}", created.name);
    let renamed = contents.rename(&created.path, &target).await.unwrap();
    assert_eq!(renamed.name, target);

    contents.delete(&renamed.path).await.unwrap();
    assert!(contents.get(&renamed.path).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_save_text_round_trip() {
    let contents = client().contents();

    let saved = contents
        .save_text("jupyrest-hello.txt", "hello world")
        .await
        .unwrap();
    assert_eq!(saved.name, "jupyrest-hello.txt");

    let fetched = contents.get("jupyrest-hello.txt").await.unwrap();
    assert_eq!(fetched.text(), Some("hello world"));

    contents.delete("jupyrest-hello.txt").await.unwrap();
}

// ── Sessions, kernels, terminals ────────────────────────────────────

#[tokio::test]
async fn test_session_lifecycle() {
    let client = client();
    let specs = client.kernel_specs().list().await.unwrap();

    let session = client
        .sessions()
        .create_for_path("jupyrest-session.ipynb", &specs.default)
        .await
        .unwrap();

    let listed = client.sessions().list().await.unwrap();
    assert!(listed.iter().any(|s| s.id == session.id));
    assert_eq!(client.sessions().get(&session.id).await.unwrap().id, session.id);

    client.sessions().delete(&session.id).await.unwrap();
    let listed = client.sessions().list().await.unwrap();
    assert!(!listed.iter().any(|s| s.id == session.id));
}

#[tokio::test]
async fn test_default_kernelspec() {
    let specs = client().kernel_specs().list().await.unwrap();
    assert!(!specs.default.is_empty());
    assert!(specs.default_spec().is_some());
}

#[tokio::test]
async fn test_kernel_lifecycle() {
    let kernels = client().kernels();

    let kernel = kernels.start_default().await.unwrap();
    assert!(kernels.list().await.unwrap().iter().any(|k| k.id == kernel.id));
    assert_eq!(kernels.get(&kernel.id).await.unwrap().id, kernel.id);

    kernels.interrupt(&kernel.id).await.unwrap();
    assert_eq!(kernels.restart(&kernel.id).await.unwrap().id, kernel.id);

    kernels.delete(&kernel.id).await.unwrap();
    assert!(kernels.get(&kernel.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_terminal_lifecycle() {
    let terminals = client().terminals();

    let terminal = terminals
        .create(CreateTerminalRequest::default())
        .await
        .unwrap();
    assert!(terminals
        .list()
        .await
        .unwrap()
        .iter()
        .any(|t| t.name == terminal.name));
    assert_eq!(terminals.get(&terminal.name).await.unwrap().name, terminal.name);

    terminals.delete(&terminal.name).await.unwrap();
    assert!(terminals.get(&terminal.name).await.is_err());
}
