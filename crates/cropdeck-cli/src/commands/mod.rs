pub mod batch;
pub mod config;
pub mod info;
pub mod presets;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use cropdeck_core::config::CropConfig;
use cropdeck_core::io::decode_data_uri;
use cropdeck_core::preset::{CropTarget, PresetTag, ProfileOwner};

#[derive(Clone, Copy, ValueEnum)]
pub enum TargetArg {
    HeaderBanner,
    FooterBanner,
    Signature,
    ProfileCircle,
    ReportThumbnail,
}

impl From<TargetArg> for PresetTag {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::HeaderBanner => PresetTag::HeaderBanner,
            TargetArg::FooterBanner => PresetTag::FooterBanner,
            TargetArg::Signature => PresetTag::Signature,
            TargetArg::ProfileCircle => PresetTag::ProfileCircle,
            TargetArg::ReportThumbnail => PresetTag::ReportThumbnail,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OwnerArg {
    Admin,
    User,
    HomeFooter,
}

impl From<OwnerArg> for ProfileOwner {
    fn from(arg: OwnerArg) -> Self {
        match arg {
            OwnerArg::Admin => ProfileOwner::Admin,
            OwnerArg::User => ProfileOwner::User,
            OwnerArg::HomeFooter => ProfileOwner::HomeFooter,
        }
    }
}

/// Build the crop destination from the target flags.
pub fn crop_target(target: TargetArg, owner: OwnerArg, slot: usize) -> CropTarget {
    match target {
        TargetArg::ProfileCircle => CropTarget::ProfileCircle(owner.into()),
        TargetArg::ReportThumbnail => CropTarget::ReportThumbnail(slot),
        other => CropTarget::default_for(other.into()),
    }
}

/// Load `--config` if given, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> Result<CropConfig> {
    match path {
        Some(path) => CropConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(CropConfig::default()),
    }
}

/// Read an input file. Text files holding a `data:` URI are unwrapped to
/// the image bytes they carry.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    if bytes.starts_with(b"data:") {
        let text = String::from_utf8_lossy(&bytes);
        let (_, payload) = decode_data_uri(&text)
            .with_context(|| format!("Malformed data URI in {}", path.display()))?;
        return Ok(payload);
    }
    Ok(bytes)
}

/// `<dir>/<stem>_<suffix>.<ext>` next to the input unless `dir` is given.
pub fn derived_output_path(source: &Path, dir: Option<&Path>, suffix: &str, ext: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let parent = dir.unwrap_or_else(|| source.parent().unwrap_or(Path::new(".")));
    parent.join(format!("{stem}_{suffix}.{ext}"))
}
