use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use cropdeck_core::session::{CropOutput, SessionHost};

use super::{crop_target, derived_output_path, load_config, read_input, OwnerArg, TargetArg};
use crate::summary;

#[derive(Args)]
pub struct RenderArgs {
    /// Input image or a text file holding a data URI
    pub file: PathBuf,

    /// Output shape
    #[arg(short, long, value_enum, default_value = "header-banner")]
    pub target: TargetArg,

    /// Whose profile photo (profile-circle only)
    #[arg(long, value_enum, default_value = "user")]
    pub owner: OwnerArg,

    /// Attachment slot (report-thumbnail only)
    #[arg(long, default_value = "0")]
    pub slot: usize,

    /// Zoom factor, clamped to 1.0-5.0
    #[arg(short, long, default_value = "1.0")]
    pub zoom: f64,

    /// Horizontal pan in source pixels at zoom 1, not screen pixels
    /// (positive moves the image right)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_x: f64,

    /// Vertical pan in source pixels at zoom 1, not screen pixels
    /// (positive moves the image down)
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_y: f64,

    /// Config file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a data URI text file instead of the encoded image
    #[arg(long)]
    pub data_uri: bool,

    /// Output file path (auto-generated if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let target = crop_target(args.target, args.owner, args.slot);
    let bytes = read_input(&args.file)?;

    let mut host = SessionHost::new(config);
    host.load(target, &bytes)
        .with_context(|| format!("Failed to open {}", args.file.display()))?;

    // Replay the framing as the gestures an interactive user would make.
    host.set_zoom(args.zoom)?;
    if args.pan_x != 0.0 || args.pan_y != 0.0 {
        host.drag_start()?;
        host.drag_move(args.pan_x, args.pan_y)?;
        host.drag_end()?;
    }

    let (viewport, sample, source_dims) = match host.session() {
        Some(session) => (
            *session.viewport(),
            session.sample_rect(),
            session.source().dimensions(),
        ),
        None => anyhow::bail!("crop session closed unexpectedly"),
    };

    let mut outputs: Vec<CropOutput> = Vec::new();
    host.confirm(&mut outputs)?;
    let output = outputs.pop().context("Confirm produced no output")?;

    let ext = if args.data_uri {
        "txt"
    } else {
        output.image.format.extension()
    };
    let path = args.output.clone().unwrap_or_else(|| {
        derived_output_path(&args.file, None, output.tag.as_str(), ext)
    });

    if args.data_uri {
        std::fs::write(&path, output.image.to_data_uri())
            .with_context(|| format!("Failed to write {}", path.display()))?;
    } else {
        output
            .image
            .save(&path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    summary::print_render_summary(&summary::RenderReport {
        input: &args.file,
        source_dims,
        output: &output,
        viewport: &viewport,
        sample: &sample,
        path: &path,
    });
    Ok(())
}
