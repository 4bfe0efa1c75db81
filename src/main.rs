use chrono::Datelike;
use clap::{Parser, Subcommand};
use kazi_folio::clipboard::SystemClipboard;
use kazi_folio::content::ContentStore;
use kazi_folio::export::{self, Artifact};
use kazi_folio::generate::{self, RenderContext};
use kazi_folio::hub::{COPIED_FLASH, HubState, HubTab};
use kazi_folio::{config, output};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "kazi-folio")]
#[command(about = "Static generator for the Kazi Emon portfolio and its Google Sites export kit")]
#[command(long_about = "\
Static generator for the Kazi Emon portfolio and its Google Sites export kit

The portfolio content (services, case studies, growth series) is built in.
The source directory only holds optional site configuration and assets:

  .
  ├── config.toml     # Theme, chart size, export kit (optional)
  └── assets/         # Copied verbatim to the output root (optional)

A build produces:

  dist/
  ├── index.html                          # The portfolio page
  ├── kazi-emon-google-sites-theme.json   # Theme file for Google Sites
  └── google-sites/
      ├── index.html                      # Standalone document
      └── embed.html                      # Snippet for Insert > Embed

The standalone document imports a placeholder module URL. Replace it with
the URL of your hosted build before uploading.

Set RUST_LOG to override the log filter (e.g. RUST_LOG=kazi_folio=trace).

Run 'kazi-folio gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding config.toml and assets/
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the portfolio page and the Google Sites export kit
    Build {
        /// Render the deployment hub already open on this tab
        #[arg(long, value_enum)]
        open_hub: Option<HubTab>,
    },
    /// Produce a single export artifact
    Export {
        #[arg(value_enum)]
        artifact: Artifact,

        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Copy the embed snippet to the system clipboard
        #[arg(long, conflicts_with = "out")]
        copy: bool,
    },
    /// Validate configuration and content without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Build { open_hub } => {
            let site_config = config::load_config(&cli.source)?;
            let hub = open_hub.map(HubState::opened_on).unwrap_or_default();
            let ctx = RenderContext {
                store: ContentStore::builtin(),
                config: &site_config,
                hub,
                now: Instant::now(),
                year: chrono::Local::now().year(),
            };
            println!("==> Building {}", cli.output.display());
            let report = generate::generate(&ctx, &cli.source, &cli.output)?;
            output::print_generate_output(&report, &cli.output);
        }
        Command::Export {
            artifact,
            out,
            copy,
        } => {
            let site_config = config::load_config(&cli.source)?;
            run_export(artifact, out, copy, &site_config.theme, &cli.output)?;
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let store = ContentStore::builtin();
            store.validate()?;
            output::print_check_output(&store, &site_config);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Install the stderr log subscriber: `info` by default, `debug` with
/// `--verbose`, `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_export(
    artifact: Artifact,
    out: Option<PathBuf>,
    copy: bool,
    theme: &config::ThemeConfig,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if copy {
        if artifact != Artifact::Embed {
            return Err(format!(
                "--copy only applies to the embed snippet, not {:?}",
                artifact
            )
            .into());
        }
        copy_embed_snippet();
        return Ok(());
    }

    match (artifact, out) {
        (_, Some(path)) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, export::render_artifact(artifact, theme))?;
            output::print_export_written(artifact, &path);
        }
        (Artifact::Theme, None) => {
            let path = export::write_theme_file(theme, output_dir)?;
            output::print_export_written(artifact, &path);
        }
        (_, None) => {
            std::io::stdout().write_all(&export::render_artifact(artifact, theme))?;
            if artifact == Artifact::Standalone {
                for line in output::placeholder_reminder() {
                    eprintln!("{}", line);
                }
            }
        }
    }
    Ok(())
}

/// Copy the embed snippet, falling back to stdout when the clipboard is
/// unavailable.
///
/// The hub's copied indicator is display state only; how long the snippet
/// stays on the clipboard is up to [`SystemClipboard::persist`].
fn copy_embed_snippet() {
    let mut hub = HubState::opened_on(HubTab::Embed);
    let mut clipboard = SystemClipboard::new();
    let now = Instant::now();
    match hub.copy_embed(now, &mut clipboard) {
        Ok(()) => {
            debug!(
                lit = hub.copied.is_lit(now),
                flash_ms = COPIED_FLASH.as_millis() as u64,
                "embed snippet copied"
            );
            output::print_copied(SystemClipboard::serves_selection());
            if let Err(e) = clipboard.persist() {
                warn!("{e}; the snippet may not outlive this command");
            }
        }
        Err(e) => {
            warn!("{e}; printing the embed snippet instead");
            print!("{}", export::build_embed_snippet());
        }
    }
}
