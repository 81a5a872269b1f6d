use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropdeck_core::io::load;

use super::{load_config, read_input};
use crate::summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image (PNG, JPEG, TIFF, ...) or a text file holding a data URI
    pub file: PathBuf,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let bytes = read_input(&args.file)?;
    let source = load(&bytes, &config.loader)
        .with_context(|| format!("Failed to decode {}", args.file.display()))?;

    summary::print_source_info(&args.file, bytes.len(), &source)?;
    Ok(())
}
