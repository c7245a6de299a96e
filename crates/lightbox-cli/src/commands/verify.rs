use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lightbox_core::config::LightboxConfig;
use lightbox_core::io::probe_records;

use super::IndexArgs;
use crate::summary::print_probe_summary;

#[derive(Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub source: IndexArgs,

    /// Directory image paths are relative to (defaults to the site root)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

pub fn run(args: &VerifyArgs, config: &LightboxConfig) -> Result<()> {
    let loaded = args.source.load(config)?;
    let root = args.root.as_ref().unwrap_or(&config.site_root);
    let records = loaded.index.all();

    let pb = ProgressBar::new(records.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Probing images");

    let results = probe_records(root, records, |done, _total| {
        pb.set_position(done as u64);
    });
    pb.finish_with_message("Probed images");

    print_probe_summary(&results);

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} image(s) missing or unreadable", results.len());
    }

    Ok(())
}
