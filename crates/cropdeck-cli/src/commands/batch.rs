use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropdeck_core::io::load;
use cropdeck_core::preset::{catalog, CropTarget};
use cropdeck_core::session::{CropOutput, CropSession};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use super::{derived_output_path, load_config, read_input};

#[derive(Args)]
pub struct BatchArgs {
    /// Input images
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory (defaults to each input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Crop every input to every preset at zoom 1, no pan.
pub fn run(args: &BatchArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(ref dir) = args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let presets = catalog();
    let pb = ProgressBar::new((args.files.len() * presets.len()) as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut written = 0usize;
    let mut failed = 0usize;
    for file in &args.files {
        let source = match read_input(file).and_then(|bytes| {
            load(&bytes, &config.loader)
                .with_context(|| format!("Failed to decode {}", file.display()))
        }) {
            Ok(source) => source,
            Err(e) => {
                pb.suspend(|| warn!(file = %file.display(), error = %e, "Skipping input"));
                pb.inc(presets.len() as u64);
                failed += presets.len();
                continue;
            }
        };

        for preset in presets {
            pb.set_message(preset.tag.to_string());
            let target = CropTarget::default_for(preset.tag);
            let result = CropSession::open(target, source.clone(), config.clone())
                .and_then(CropSession::confirm)
                .map_err(anyhow::Error::from)
                .and_then(|output: CropOutput| {
                    let path = derived_output_path(
                        file,
                        args.output_dir.as_deref(),
                        preset.tag.as_str(),
                        output.image.format.extension(),
                    );
                    output
                        .image
                        .save(&path)
                        .with_context(|| format!("Failed to write {}", path.display()))
                });
            match result {
                Ok(()) => written += 1,
                Err(e) => {
                    pb.suspend(|| {
                        warn!(
                            file = %file.display(),
                            preset = %preset.tag,
                            error = %e,
                            "Crop failed"
                        )
                    });
                    failed += 1;
                }
            }
            pb.inc(1);
        }
    }
    pb.finish_and_clear();

    println!("Wrote {written} crops ({failed} failed)");
    if written == 0 {
        anyhow::bail!("no crops were written");
    }
    Ok(())
}
