//! Terminals command - manage running terminals.

use anyhow::Result;
use clap::{Args, Subcommand};
use jupyrest_client::{CreateTerminalRequest, Terminal};

use super::{empty, field, heading, Context};

/// Arguments for the terminals command.
#[derive(Args, Debug)]
pub struct TerminalsArgs {
    #[command(subcommand)]
    pub command: Option<TerminalsCommand>,
}

#[derive(Subcommand, Debug)]
pub enum TerminalsCommand {
    /// List running terminals (default)
    List,

    /// Open a new terminal
    Create {
        /// Working directory for the shell
        #[arg(long)]
        cwd: Option<String>,
    },

    /// Show a terminal
    Get {
        /// Terminal name
        name: String,
    },

    /// Terminate a terminal
    Delete {
        /// Terminal name
        name: String,
    },
}

/// Run the terminals command.
pub async fn run(args: TerminalsArgs, ctx: &Context) -> Result<()> {
    let terminals = ctx.client.terminals();

    match args.command.unwrap_or(TerminalsCommand::List) {
        TerminalsCommand::List => {
            let list = terminals.list().await?;
            ctx.emit(&list, |list| {
                heading("Terminals");
                if list.is_empty() {
                    empty("terminals");
                }
                for terminal in list {
                    print_terminal(terminal);
                }
            })?;
        }
        TerminalsCommand::Create { cwd } => {
            let terminal = terminals.create(CreateTerminalRequest { cwd }).await?;
            ctx.emit(&terminal, |t| {
                ctx.done(&format!("Terminal created: {}", t.name))
            })?;
        }
        TerminalsCommand::Get { name } => {
            let terminal = terminals.get(&name).await?;
            ctx.emit(&terminal, |t| {
                heading("Terminal");
                field("Name:", &t.name);
                field("Last activity:", t.last_activity.as_deref().unwrap_or("-"));
            })?;
        }
        TerminalsCommand::Delete { name } => {
            terminals.delete(&name).await?;
            ctx.done(&format!("Terminal deleted: {}", name));
        }
    }

    Ok(())
}

fn print_terminal(terminal: &Terminal) {
    println!(
        "  {:<8} {}",
        terminal.name,
        terminal.last_activity.as_deref().unwrap_or("-")
    );
}
