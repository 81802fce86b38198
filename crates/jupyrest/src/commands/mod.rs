//! CLI command handlers.

use anyhow::Result;
use console::Style;
use jupyrest_client::JupyterClient;
use serde::Serialize;

pub mod contents;
pub mod kernels;
pub mod kernelspecs;
pub mod server;
pub mod sessions;
pub mod terminals;

/// Shared context for all commands.
#[derive(Clone)]
pub struct Context {
    /// Configured API client.
    pub client: JupyterClient,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Print `value` as JSON when `--json` is set; otherwise run `human`.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> Result<()> {
        if self.json_output {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }

    /// Print a one-line confirmation.
    pub fn done(&self, message: &str) {
        if !self.json_output {
            println!("{} {}", Style::new().green().apply_to("✓"), message);
        }
    }
}

/// Print a bold heading with a rule under it.
pub fn heading(title: &str) {
    let dim = Style::new().dim();
    println!("{}", console::style(title).bold());
    println!("{}", dim.apply_to("─".repeat(50)));
}

/// Print a dimmed label followed by a value.
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", Style::new().dim().apply_to(label), value);
}

/// Print the placeholder for an empty listing.
pub fn empty(what: &str) {
    println!("{}", Style::new().dim().apply_to(format!("No {} found", what)));
}
