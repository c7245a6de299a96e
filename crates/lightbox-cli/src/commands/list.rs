use anyhow::Result;
use clap::Args;
use lightbox_core::config::LightboxConfig;
use lightbox_core::consts::ALL_CATEGORY;
use lightbox_core::error::LightboxError;
use lightbox_core::gallery::Gallery;

use super::IndexArgs;

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: IndexArgs,

    /// Category to list
    #[arg(long, default_value = ALL_CATEGORY)]
    pub category: String,

    /// Only keep images whose name or path contains this text
    #[arg(long)]
    pub filter: Option<String>,

    /// Print the records as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: &ListArgs, config: &LightboxConfig) -> Result<()> {
    let loaded = args.source.load(config)?;

    let mut gallery = Gallery::new(config.grouping.clone());
    gallery.set_index(loaded.index);
    if gallery.index().get(&args.category).is_none() {
        anyhow::bail!(
            "Unknown category {:?} (available: {})",
            args.category,
            gallery.categories().join(", ")
        );
    }
    gallery.select_category(&args.category);
    if let Some(ref query) = args.filter {
        gallery.set_filter(query);
    }

    let records = gallery.visible();
    if records.is_empty() {
        return Err(LightboxError::EmptyResult(gallery.status().to_string()).into());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    println!("{:>5}  {:<32}  {}", "#", "Name", "Path");
    println!("{}", "-".repeat(60));
    for (i, record) in records.iter().enumerate() {
        println!("{:>5}  {:<32}  {}", i + 1, record.name, record.path);
    }
    println!("\n{} image(s) in {}", records.len(), args.category);

    Ok(())
}
