//! Forecourt CLI
//!
//! Manage per-tenant site themes from the command line: render the
//! scoped CSS for a slug, inspect the effective configuration, set a
//! tenant's color pair, and reset one tenant or the whole namespace.

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use forecourt_core::parse_hex;
use forecourt_store::{ColorPatch, ConfigStore, FileBackend, SiteConfig, SiteConfigPatch};
use forecourt_theme::{derived_palette, render_css, PalettePreset};

use config::{ForecourtConfig, CONFIG_FILE};

#[derive(Parser)]
#[command(name = "forecourt", version, about = "Tenant site theming engine")]
struct Cli {
    /// Project directory containing forecourt.toml
    #[arg(long, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default forecourt.toml into the project directory
    Init,
    /// Render the scoped CSS ruleset for a tenant
    Render {
        /// Tenant slug (placeholder namespace when omitted)
        #[arg(long)]
        slug: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a tenant's effective merged configuration as JSON
    Show {
        #[arg(long)]
        slug: Option<String>,
    },
    /// Update and persist a tenant's primary/accent pair
    SetColors {
        #[arg(long)]
        slug: Option<String>,
        primary: String,
        accent: String,
    },
    /// Remove a tenant's stored configuration
    Reset {
        #[arg(long)]
        slug: Option<String>,
    },
    /// Remove every stored tenant entry in the namespace
    Purge {
        /// Confirm the namespace-wide removal
        #[arg(long)]
        yes: bool,
    },
    /// List the stock palette presets
    Presets,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let project_config = ForecourtConfig::load_from_dir(&cli.project)?;

    if matches!(cli.command, Command::Init) {
        return init_project(&cli.project, &project_config);
    }

    let backend = FileBackend::new(cli.project.join(&project_config.storage.dir))
        .context("Failed to open the tenant storage directory")?;
    let mut store = ConfigStore::with_defaults(backend, tenant_defaults(&project_config));

    match cli.command {
        Command::Init => unreachable!("handled above"),
        Command::Render { slug, out } => {
            let site = store.load(slug.as_deref());
            let palette = derived_palette(&site.colors.primary, &site.colors.accent);
            let css = render_css(&palette, &project_config.theme.scope_attr);
            match out {
                Some(path) => {
                    fs::write(&path, css)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{css}"),
            }
        }
        Command::Show { slug } => {
            let site = store.load(slug.as_deref());
            println!("{}", serde_json::to_string_pretty(&site)?);
        }
        Command::SetColors {
            slug,
            primary,
            accent,
        } => {
            for (label, token) in [("primary", &primary), ("accent", &accent)] {
                if let Err(err) = parse_hex(token) {
                    tracing::warn!(%label, %token, %err, "color will fall back to the stock triple");
                }
            }
            let mut site = store.load(slug.as_deref());
            site.apply(SiteConfigPatch {
                colors: Some(ColorPatch {
                    primary: Some(primary.clone()),
                    accent: Some(accent.clone()),
                }),
                ..Default::default()
            });
            store.save(slug.as_deref(), &site);
            println!("Set colors {primary} / {accent}");
        }
        Command::Reset { slug } => {
            store.reset(slug.as_deref());
            println!("Reset {}", slug.as_deref().unwrap_or("preview tenant"));
        }
        Command::Purge { yes } => {
            if !yes {
                bail!("Refusing to purge every tenant entry without --yes");
            }
            let removed = store
                .purge_namespace()
                .context("Failed to purge the storage namespace")?;
            println!("Removed {removed} stored entries");
        }
        Command::Presets => {
            for preset in PalettePreset::all() {
                let (primary, accent) = preset.pair();
                println!("{:<10} {:<10} {primary} / {accent}", preset.id(), preset);
            }
        }
    }

    Ok(())
}

/// Defaults handed to the store: stock config with the configured
/// preset's color pair.
fn tenant_defaults(project: &ForecourtConfig) -> SiteConfig {
    let mut defaults = SiteConfig::default();
    match PalettePreset::find(&project.theme.preset) {
        Some(preset) => {
            let (primary, accent) = preset.pair();
            defaults.colors.primary = primary.to_string();
            defaults.colors.accent = accent.to_string();
        }
        None => {
            tracing::warn!(preset = %project.theme.preset, "unknown preset id, keeping stock colors");
        }
    }
    defaults
}

fn init_project(project_dir: &Path, config: &ForecourtConfig) -> Result<()> {
    let path = project_dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    fs::write(&path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
