//! Kernelspecs command - list installed kernel types.

use anyhow::Result;
use console::Style;

use super::{empty, heading, Context};

/// Run the kernelspecs command.
pub async fn run(ctx: &Context) -> Result<()> {
    let specs = ctx.client.kernel_specs().list().await?;

    ctx.emit(&specs, |specs| {
        heading("Kernel Specs");
        if specs.kernelspecs.is_empty() {
            empty("kernel specs");
            return;
        }

        let mut names: Vec<_> = specs.kernelspecs.keys().collect();
        names.sort();
        for name in names {
            let spec = &specs.kernelspecs[name];
            let marker = if *name == specs.default { "*" } else { " " };
            println!(
                "{} {:<20} {}",
                Style::new().green().apply_to(marker),
                name,
                Style::new().dim().apply_to(spec.display_name().unwrap_or(""))
            );
        }
    })
}
