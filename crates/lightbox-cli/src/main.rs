mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lightbox_core::config::LightboxConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lightbox", about = "Categorized image index browser")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the categories of an index with their sizes
    Categories(commands::categories::CategoriesArgs),
    /// List the images of one category
    List(commands::list::ListArgs),
    /// Resolve a job access code to its index and asset locations
    Resolve(commands::resolve::ResolveArgs),
    /// Check that every image of an index exists and can be decoded
    Verify(commands::verify::VerifyArgs),
    /// Replay a recorded pointer trace through the gesture controller
    Replay(commands::replay::ReplayArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match cli.config {
        Some(ref path) => LightboxConfig::load(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => LightboxConfig::default(),
    };

    match &cli.command {
        Commands::Categories(args) => commands::categories::run(args, &config),
        Commands::List(args) => commands::list::run(args, &config),
        Commands::Resolve(args) => commands::resolve::run(args, &config),
        Commands::Verify(args) => commands::verify::run(args, &config),
        Commands::Replay(args) => commands::replay::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
