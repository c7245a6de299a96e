use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lightbox_core::config::LightboxConfig;
use lightbox_core::io::load_registry;

use crate::summary::print_job_location;

#[derive(Args)]
pub struct ResolveArgs {
    /// Job access code
    pub code: String,

    /// Registry document, relative to the site root
    #[arg(long)]
    pub registry: Option<PathBuf>,

    /// Print the resolved locations as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ResolveArgs, config: &LightboxConfig) -> Result<()> {
    let registry_path = args.registry.as_ref().unwrap_or(&config.registry);
    let registry = load_registry(&config.site_root, registry_path).with_context(|| {
        format!(
            "Failed to read job registry {}",
            config.site_root.join(registry_path).display()
        )
    })?;
    let job = registry.resolve(&args.code)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&job)?);
    } else {
        print_job_location(&job);
    }

    Ok(())
}
