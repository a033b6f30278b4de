use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use relay_apollo_config::config::defaults::{DIRECTIVES_DUMP_DIR, RELAY_COMPILER_VERSION};
use relay_apollo_config::config::{generate_config, validate_raw_config, ConfigLoader};
use relay_apollo_config::directives;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(ClapParser, Debug)]
#[command(name = "relay-apollo-config")]
#[command(version)]
#[command(about = "Generate Apollo language-server config from a Relay config")]
struct Args {
    /// Enable verbose logging (to stderr)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the Relay config and print the resolved Apollo config
    Resolve {
        /// Directory to start searching from
        #[arg(long, default_value = ".")]
        cwd: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Write the Relay client directives SDL dump
    DumpDirectives {
        /// Directory to write the dump into (where resolved configs expect it)
        #[arg(long, default_value = DIRECTIVES_DUMP_DIR)]
        out_dir: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging goes to stderr; stdout carries the generated config
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(args.verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match args.command {
        Command::Resolve { cwd, format } => run_resolve(&cwd, format),
        Command::DumpDirectives { out_dir } => run_dump_directives(&out_dir),
    }
}

/// `RUST_LOG` wins when set and valid; otherwise `--verbose` picks the level
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if let Some(directives) = rust_log {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid RUST_LOG '{}': {}", directives, e),
        }
    }
    EnvFilter::new(if verbose { "debug" } else { "info" })
}

fn run_resolve(cwd: &Path, format: OutputFormat) -> Result<()> {
    let loaded = ConfigLoader::new()
        .search(cwd)
        .with_context(|| format!("Failed to load Relay config from {:?}", cwd))?;

    let raw = match &loaded {
        Some(loaded) => {
            validate_raw_config(&loaded.config);
            Some(&loaded.config)
        }
        None => {
            info!("No Relay config found, using defaults");
            None
        }
    };

    let config = generate_config(raw)?;
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&config)?,
        OutputFormat::Yaml => serde_yaml::to_string(&config)?,
    };
    println!("{}", output);
    Ok(())
}

fn run_dump_directives(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {:?}", out_dir))?;

    for entry in fs::read_dir(out_dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if directives::is_stale_dump(name, RELAY_COMPILER_VERSION) {
            match fs::remove_file(entry.path()) {
                Ok(()) => info!("Removed stale directives dump {}", name),
                Err(e) => warn!("Failed to remove stale dump {}: {}", name, e),
            }
        }
    }

    let path = out_dir.join(directives::dump_file_name(RELAY_COMPILER_VERSION));
    fs::write(&path, directives::render_sdl(RELAY_COMPILER_VERSION))
        .with_context(|| format!("Failed to write {:?}", path))?;
    info!("Wrote {} directives to {:?}", directives::RELAY_DIRECTIVES.len(), path);
    Ok(())
}
