use anyhow::Result;
use clap::Args;
use lightbox_core::config::LightboxConfig;

use super::IndexArgs;
use crate::summary::print_categories;

#[derive(Args)]
pub struct CategoriesArgs {
    #[command(flatten)]
    pub source: IndexArgs,
}

pub fn run(args: &CategoriesArgs, config: &LightboxConfig) -> Result<()> {
    let loaded = args.source.load(config)?;
    print_categories(&loaded.index, &loaded.source);
    Ok(())
}
