//! Sessions command - manage notebook and console sessions.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;
use jupyrest_client::{CreateSessionRequest, KernelRef, Session, UpdateSessionRequest};

use super::{empty, field, heading, Context};

/// Arguments for the sessions command.
#[derive(Args, Debug)]
pub struct SessionsArgs {
    #[command(subcommand)]
    pub command: Option<SessionsCommand>,
}

#[derive(Subcommand, Debug)]
pub enum SessionsCommand {
    /// List sessions (default)
    List,

    /// Create a session for a path
    Create {
        /// Path the session is bound to
        path: String,

        /// Kernel spec to start
        #[arg(short, long)]
        kernel: Option<String>,

        /// Attach to an existing kernel instead of starting one
        #[arg(long, conflicts_with = "kernel")]
        kernel_id: Option<String>,

        /// Session type
        #[arg(long = "type", default_value = "notebook")]
        kind: String,
    },

    /// Show a session
    Get {
        /// Session ID
        id: String,
    },

    /// Move a session to a new path
    Rename {
        /// Session ID
        id: String,

        /// New path
        path: String,
    },

    /// Delete a session and shut down its kernel
    Delete {
        /// Session ID
        id: String,
    },
}

/// Run the sessions command.
pub async fn run(args: SessionsArgs, ctx: &Context) -> Result<()> {
    let sessions = ctx.client.sessions();

    match args.command.unwrap_or(SessionsCommand::List) {
        SessionsCommand::List => {
            let list = sessions.list().await?;
            ctx.emit(&list, |list| {
                heading("Sessions");
                if list.is_empty() {
                    empty("sessions");
                }
                for session in list {
                    println!(
                        "  {} {} {}",
                        session.id,
                        session.path,
                        Style::new()
                            .dim()
                            .apply_to(format!("[{}]", session.kernel_id().unwrap_or("no kernel")))
                    );
                }
            })?;
        }
        SessionsCommand::Create {
            path,
            kernel,
            kernel_id,
            kind,
        } => {
            let kernel = (kernel.is_some() || kernel_id.is_some()).then(|| KernelRef {
                name: kernel,
                id: kernel_id,
            });
            let request = CreateSessionRequest {
                name: Some(path.clone()),
                path,
                kind: Some(kind),
                kernel,
            };
            let session = sessions.create(request).await?;
            ctx.emit(&session, |s| {
                ctx.done(&format!("Session created: {}", s.id))
            })?;
        }
        SessionsCommand::Get { id } => {
            let session = sessions.get(&id).await?;
            ctx.emit(&session, print_session)?;
        }
        SessionsCommand::Rename { id, path } => {
            let request = UpdateSessionRequest {
                path: Some(path),
                ..Default::default()
            };
            let session = sessions.update(&id, request).await?;
            ctx.emit(&session, |s| {
                ctx.done(&format!("Session {} now at {}", s.id, s.path))
            })?;
        }
        SessionsCommand::Delete { id } => {
            sessions.delete(&id).await?;
            ctx.done(&format!("Session deleted: {}", id));
        }
    }

    Ok(())
}

fn print_session(session: &Session) {
    heading("Session");
    field("ID:", &session.id);
    field("Name:", &session.name);
    field("Path:", &session.path);
    field("Type:", &session.kind);
    field("Kernel:", session.kernel_id().unwrap_or("-"));
}
