//! CLI integration tests for the jupyrest command-line interface.
//!
//! Help and argument parsing run without a server; the remaining tests
//! point the binary at a mock notebook server.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for the jupyrest binary with no ambient configuration.
fn jupyrest() -> Command {
    let mut cmd = Command::cargo_bin("jupyrest").unwrap();
    cmd.env_remove("JUPYTERLAB_API_TOKEN")
        .env_remove("JUPYTERLAB_API_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Command pointed at a mock server with a token.
fn jupyrest_at(server: &MockServer) -> Command {
    let mut cmd = jupyrest();
    cmd.env("JUPYTERLAB_API_URL", format!("{}/api", server.uri()))
        .env("JUPYTERLAB_API_TOKEN", "faketoken");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_lists_subcommands() {
    jupyrest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("contents"))
        .stdout(predicate::str::contains("sessions"))
        .stdout(predicate::str::contains("kernelspecs"))
        .stdout(predicate::str::contains("kernels"))
        .stdout(predicate::str::contains("terminals"));
}

#[test]
fn test_version_flag_displays() {
    jupyrest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jupyrest"));
}

#[test]
fn test_kernels_help() {
    jupyrest()
        .args(["kernels", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interrupt"))
        .stdout(predicate::str::contains("restart"));
}

#[test]
fn test_contents_rejects_unknown_type() {
    jupyrest()
        .args(["--token", "t", "contents", "get", "--type", "spreadsheet"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_missing_token_fails_before_any_request() {
    jupyrest()
        .args(["--url", "http://127.0.0.1:1/api", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JUPYTERLAB_API_TOKEN"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Against a mock server
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_version_prints_server_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(header("authorization", "Bearer faketoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "2.14.1"})))
        .mount(&server)
        .await;

    jupyrest_at(&server)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("2.14.1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_output_for_kernel_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/kernels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "k-1",
            "name": "python3",
            "execution_state": "idle",
            "connections": 0
        }])))
        .mount(&server)
        .await;

    jupyrest_at(&server)
        .args(["--json", "kernels", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"k-1\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contents_save_sends_text_model() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/contents/hello.txt"))
        .and(body_json(json!({"type": "file", "format": "text", "content": "hello world"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "hello.txt",
            "path": "hello.txt",
            "type": "file"
        })))
        .expect(1)
        .mount(&server)
        .await;

    jupyrest_at(&server)
        .args(["contents", "save", "hello.txt", "--text", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved: hello.txt"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_status_error_exits_nonzero() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/terminals/7"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"message": "Terminal not found: 7", "reason": null})),
        )
        .mount(&server)
        .await;

    jupyrest_at(&server)
        .args(["terminals", "delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: API error (404): Terminal not found: 7"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_contents_delete_refuses_parent_segments() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    jupyrest_at(&server)
        .args(["contents", "delete", "notes/../important.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid path"));
}
