//! Contents command - files, notebooks and directories.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand, ValueEnum};
use console::Style;
use jupyrest_client::{
    Content, ContentBody, ContentFormat, ContentQuery, ContentType, CreateContentRequest,
    SaveContentRequest,
};

use super::{empty, field, heading, Context};

/// Arguments for the contents command.
#[derive(Args, Debug)]
pub struct ContentsArgs {
    #[command(subcommand)]
    pub command: ContentsCommand,
}

/// Content type as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TypeArg {
    Directory,
    File,
    Notebook,
}

impl From<TypeArg> for ContentType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Directory => ContentType::Directory,
            TypeArg::File => ContentType::File,
            TypeArg::Notebook => ContentType::Notebook,
        }
    }
}

/// Content format as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FormatArg {
    Json,
    Text,
    Base64,
}

impl From<FormatArg> for ContentFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ContentFormat::Json,
            FormatArg::Text => ContentFormat::Text,
            FormatArg::Base64 => ContentFormat::Base64,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ContentsCommand {
    /// Show a file or list a directory
    Get {
        /// Path relative to the server root (root if omitted)
        #[arg(default_value = "")]
        path: String,

        /// Expected type
        #[arg(long = "type", value_enum)]
        kind: Option<TypeArg>,

        /// Payload format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Only fetch metadata
        #[arg(long)]
        no_content: bool,

        /// Ask the server for a content hash
        #[arg(long)]
        hash: bool,
    },

    /// Create an untitled file, notebook or directory
    Create {
        /// Parent directory (root if omitted)
        #[arg(default_value = "")]
        parent: String,

        /// File extension, e.g. .txt
        #[arg(long)]
        ext: Option<String>,

        /// Copy an existing file instead of creating an empty one
        #[arg(long)]
        copy_from: Option<String>,

        /// Type of the new entry
        #[arg(long = "type", value_enum)]
        kind: Option<TypeArg>,
    },

    /// Rename or move an entry
    Rename {
        /// Current path
        path: String,

        /// New path
        new_path: String,
    },

    /// Save a text file, from --text or a local file
    Save {
        /// Destination path on the server
        path: String,

        /// Text to write
        #[arg(long, conflicts_with = "from")]
        text: Option<String>,

        /// Local file to upload as text
        #[arg(long)]
        from: Option<std::path::PathBuf>,
    },

    /// Delete an entry
    Delete {
        /// Path to delete
        path: String,
    },
}

/// Run the contents command.
pub async fn run(args: ContentsArgs, ctx: &Context) -> Result<()> {
    let contents = ctx.client.contents();

    match args.command {
        ContentsCommand::Get {
            path,
            kind,
            format,
            no_content,
            hash,
        } => {
            let query = ContentQuery {
                kind: kind.map(Into::into),
                format: format.map(Into::into),
                content: !no_content,
                hash,
            };
            let entry = contents.get_with_query(&path, &query).await?;
            ctx.emit(&entry, print_content)?;
        }
        ContentsCommand::Create {
            parent,
            ext,
            copy_from,
            kind,
        } => {
            let request = CreateContentRequest {
                copy_from,
                ext,
                kind: kind.map(Into::into),
            };
            let created = contents.create(&parent, request).await?;
            ctx.emit(&created, |c| ctx.done(&format!("Created: {}", c.path)))?;
        }
        ContentsCommand::Rename { path, new_path } => {
            let renamed = contents.rename(&path, &new_path).await?;
            ctx.emit(&renamed, |c| {
                ctx.done(&format!("Renamed {} -> {}", path, c.path))
            })?;
        }
        ContentsCommand::Save { path, text, from } => {
            let text = match (text, from) {
                (Some(text), _) => text,
                (None, Some(local)) => std::fs::read_to_string(&local)
                    .with_context(|| format!("reading {}", local.display()))?,
                (None, None) => anyhow::bail!("nothing to save: pass --text or --from"),
            };
            let saved = contents.save(&path, SaveContentRequest::text(text)).await?;
            ctx.emit(&saved, |c| ctx.done(&format!("Saved: {}", c.path)))?;
        }
        ContentsCommand::Delete { path } => {
            contents.delete(&path).await?;
            ctx.done(&format!("Deleted: {}", path));
        }
    }

    Ok(())
}

fn print_content(entry: &Content) {
    let dim = Style::new().dim();

    match &entry.content {
        Some(ContentBody::Directory(children)) => {
            heading(if entry.path.is_empty() { "/" } else { entry.path.as_str() });
            if children.is_empty() {
                empty("entries");
            }
            for child in children {
                let name = if child.is_directory() {
                    format!("{}/", child.name)
                } else {
                    child.name.clone()
                };
                println!(
                    "  {:<40} {}",
                    name,
                    dim.apply_to(child.last_modified.as_deref().unwrap_or(""))
                );
            }
        }
        Some(ContentBody::Text(text)) if entry.format == Some(ContentFormat::Text) => {
            print!("{}", text);
        }
        Some(ContentBody::Notebook(document)) => {
            println!(
                "{}",
                serde_json::to_string_pretty(document).unwrap_or_default()
            );
        }
        _ => {
            heading(&entry.path);
            field("Type:", entry.kind);
            field("Size:", entry.size.map_or("-".to_string(), |s| s.to_string()));
            field("Modified:", entry.last_modified.as_deref().unwrap_or("-"));
            field("Writable:", entry.writable);
            if let Some(hash) = &entry.hash {
                field(
                    "Hash:",
                    format!("{} ({})", hash, entry.hash_algorithm.as_deref().unwrap_or("?")),
                );
            }
        }
    }
}
