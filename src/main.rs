#![deny(unsafe_code)]

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use property_store::{PropertyStore, StoreError, paths};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "property-store")]
#[command(version)]
#[command(about = "Inspect and edit XML property files", long_about = None)]
struct Cli {
    /// Property file to operate on (defaults to $PROPERTY_STORE_FILE, then the user config dir)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value stored under a key
    Get { key: String },

    /// Set a key and write the file, creating its directory if needed
    Set {
        key: String,
        value: String,
        /// Comment written into the document
        #[arg(long)]
        comment: Option<String>,
    },

    /// Remove a key and write the file
    Unset {
        key: String,
        /// Comment written into the document
        #[arg(long)]
        comment: Option<String>,
    },

    /// Print every property
    List {
        /// Print a JSON object instead of key=value lines
        #[arg(long)]
        json: bool,
    },

    /// Print the stored window geometry
    Geometry {
        /// Print JSON instead of key=value lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so command output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let path = paths::resolve_path(cli.file);
    let mut store = PropertyStore::new(&path);

    match cli.command {
        Command::Get { key } => {
            store.try_load()?;
            let value = store
                .get_property(&key)
                .with_context(|| format!("Property `{key}` is not set in {:?}", path))?;
            println!("{value}");
        }
        Command::Set {
            key,
            value,
            comment,
        } => {
            load_if_present(&mut store)?;
            store.set_property(key, value);
            save(&store, comment.as_deref())?;
        }
        Command::Unset { key, comment } => {
            load_if_present(&mut store)?;
            if store.remove_property(&key).is_none() {
                info!(key = %key, "Property was not set");
            }
            save(&store, comment.as_deref())?;
        }
        Command::List { json } => {
            load_if_present(&mut store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(store.properties())?);
            } else {
                for (key, value) in store.properties() {
                    println!("{key}={value}");
                }
            }
        }
        Command::Geometry { json } => {
            load_if_present(&mut store)?;
            let geometry = store.stored_geometry();
            if json {
                println!("{}", serde_json::to_string_pretty(&geometry)?);
            } else {
                let fields = [
                    ("x", geometry.x.map(|v| v.to_string())),
                    ("y", geometry.y.map(|v| v.to_string())),
                    ("width", geometry.width.map(|v| v.to_string())),
                    ("height", geometry.height.map(|v| v.to_string())),
                    ("maximized", geometry.maximized.map(|v| v.to_string())),
                ];
                for (name, value) in fields {
                    if let Some(value) = value {
                        println!("{name}={value}");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Load the file, treating a missing one as an empty store
fn load_if_present(store: &mut PropertyStore) -> Result<()> {
    match store.try_load() {
        Ok(()) => Ok(()),
        Err(StoreError::NotFound { path }) => {
            info!(path = %path.display(), "Property file not found, starting empty");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn save(store: &PropertyStore, comment: Option<&str>) -> Result<()> {
    if let Some(parent) = store.path().parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    store.try_store(comment)?;
    info!(path = %store.path().display(), "Saved properties");
    Ok(())
}
