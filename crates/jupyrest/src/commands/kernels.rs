//! Kernels command - manage running kernels.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;
use jupyrest_client::{Kernel, StartKernelRequest};

use super::{empty, field, heading, Context};

/// Arguments for the kernels command.
#[derive(Args, Debug)]
pub struct KernelsArgs {
    #[command(subcommand)]
    pub command: Option<KernelsCommand>,
}

#[derive(Subcommand, Debug)]
pub enum KernelsCommand {
    /// List running kernels (default)
    List,

    /// Start a kernel
    Start {
        /// Kernel spec name (server default if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Working directory, relative to the server root
        #[arg(long)]
        path: Option<String>,
    },

    /// Show a kernel
    Get {
        /// Kernel ID
        id: String,
    },

    /// Shut down a kernel
    Delete {
        /// Kernel ID
        id: String,
    },

    /// Interrupt a kernel
    Interrupt {
        /// Kernel ID
        id: String,
    },

    /// Restart a kernel
    Restart {
        /// Kernel ID
        id: String,
    },
}

/// Run the kernels command.
pub async fn run(args: KernelsArgs, ctx: &Context) -> Result<()> {
    let kernels = ctx.client.kernels();

    match args.command.unwrap_or(KernelsCommand::List) {
        KernelsCommand::List => {
            let list = kernels.list().await?;
            ctx.emit(&list, |list| {
                heading("Kernels");
                if list.is_empty() {
                    empty("kernels");
                }
                for kernel in list {
                    print_kernel_row(kernel);
                }
            })?;
        }
        KernelsCommand::Start { name, path } => {
            let kernel = kernels.start(StartKernelRequest { name, path }).await?;
            ctx.emit(&kernel, |k| {
                ctx.done(&format!("Kernel started: {} ({})", k.id, k.name))
            })?;
        }
        KernelsCommand::Get { id } => {
            let kernel = kernels.get(&id).await?;
            ctx.emit(&kernel, print_kernel)?;
        }
        KernelsCommand::Delete { id } => {
            kernels.delete(&id).await?;
            ctx.done(&format!("Kernel shut down: {}", id));
        }
        KernelsCommand::Interrupt { id } => {
            kernels.interrupt(&id).await?;
            ctx.done(&format!("Kernel interrupted: {}", id));
        }
        KernelsCommand::Restart { id } => {
            let kernel = kernels.restart(&id).await?;
            ctx.emit(&kernel, |k| ctx.done(&format!("Kernel restarted: {}", k.id)))?;
        }
    }

    Ok(())
}

fn print_kernel_row(kernel: &Kernel) {
    println!(
        "  {} {:<12} {}",
        kernel.id,
        kernel.name,
        Style::new()
            .dim()
            .apply_to(kernel.execution_state.as_deref().unwrap_or("unknown"))
    );
}

fn print_kernel(kernel: &Kernel) {
    heading("Kernel");
    field("ID:", &kernel.id);
    field("Name:", &kernel.name);
    field("State:", kernel.execution_state.as_deref().unwrap_or("unknown"));
    field("Connections:", kernel.connections);
    field("Last activity:", kernel.last_activity.as_deref().unwrap_or("-"));
}
