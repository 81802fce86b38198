//! Server commands - version, status and identity.

use std::collections::HashMap;

use anyhow::Result;
use clap::Args;

use super::{field, heading, Context};

/// Arguments for the me command.
#[derive(Args, Debug)]
pub struct MeArgs {
    /// Check a permission, as resource:action (repeatable)
    #[arg(short, long = "permission", value_name = "RESOURCE:ACTION")]
    pub permissions: Vec<String>,
}

/// Run the version command.
pub async fn version(ctx: &Context) -> Result<()> {
    let version = ctx.client.server().version().await?;
    ctx.emit(&version, |v| println!("{}", v.version))
}

/// Run the status command.
pub async fn status(ctx: &Context) -> Result<()> {
    let status = ctx.client.server().status().await?;
    ctx.emit(&status, |s| {
        heading("Server Status");
        field("Started:", &s.started);
        field("Last activity:", &s.last_activity);
        field("Kernels:", s.kernels);
        field("Connections:", s.connections);
        if ctx.verbose {
            field("Server:", ctx.client.base_url());
        }
    })
}

/// Run the me command.
pub async fn me(args: MeArgs, ctx: &Context) -> Result<()> {
    let me = if args.permissions.is_empty() {
        ctx.client.server().me().await?
    } else {
        let permissions = parse_permissions(&args.permissions)?;
        ctx.client.server().me_with_permissions(&permissions).await?
    };

    ctx.emit(&me, |me| {
        heading("Identity");
        field("User:", me.username().unwrap_or("(unknown)"));
        if let Some(name) = me.identity.get("name").and_then(|v| v.as_str()) {
            field("Name:", name);
        }
        if let Some(permissions) = &me.permissions {
            field("Permissions:", permissions);
        }
    })
}

/// Group `resource:action` pairs by resource.
fn parse_permissions(pairs: &[String]) -> Result<HashMap<String, Vec<String>>> {
    let mut permissions: HashMap<String, Vec<String>> = HashMap::new();
    for pair in pairs {
        let (resource, action) = pair
            .split_once(':')
            .ok_or_else(|| anyhow::anyhow!("expected RESOURCE:ACTION, got '{}'", pair))?;
        permissions
            .entry(resource.to_string())
            .or_default()
            .push(action.to_string());
    }
    Ok(permissions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_permissions_groups_by_resource() {
        let pairs = vec![
            "contents:read".to_string(),
            "contents:write".to_string(),
            "kernels:execute".to_string(),
        ];
        let permissions = parse_permissions(&pairs).unwrap();
        assert_eq!(permissions["contents"], vec!["read", "write"]);
        assert_eq!(permissions["kernels"], vec!["execute"]);
    }

    #[test]
    fn test_parse_permissions_rejects_missing_colon() {
        assert!(parse_permissions(&["contents".to_string()]).is_err());
    }
}
