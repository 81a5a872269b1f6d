use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BACKGROUND, DEFAULT_MAX_SOURCE_DIMENSION};
use crate::error::{CropError, Result};
use crate::io::ExportFormat;

/// Top-level settings for the crop engine, usually read from `cropdeck.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropConfig {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl CropConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| CropError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CropError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.loader.max_dimension == 0 {
            return Err(CropError::Config("loader.max_dimension must be > 0".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Reject sources wider or taller than this many pixels.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
    /// Honour the EXIF orientation tag written by cameras and phones.
    #[serde(default = "default_true")]
    pub apply_orientation: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_SOURCE_DIMENSION,
            apply_orientation: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_dimension() -> u32 {
    DEFAULT_MAX_SOURCE_DIMENSION
}

fn default_background() -> [u8; 4] {
    DEFAULT_BACKGROUND
}

/// Resampling used when mapping the sampled rectangle onto the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Nearest,
    #[default]
    Bilinear,
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Bilinear => write!(f, "Bilinear"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// RGBA fill for output pixels that sample outside the source.
    #[serde(default = "default_background")]
    pub background: [u8; 4],
    #[serde(default)]
    pub filter: ResampleFilter,
    /// Make pixels outside the inscribed circle transparent for circle presets.
    /// Off by default: the circle is normally applied by whoever displays it.
    #[serde(default)]
    pub bake_circle_mask: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            filter: ResampleFilter::default(),
            bake_circle_mask: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportFormat,
}

/// What to do when a new upload arrives while a crop is still open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplacePolicy {
    /// Discard the open crop and start over with the new image.
    #[default]
    Replace,
    /// Refuse the upload until the open crop is confirmed or cancelled.
    RequireResolve,
}

impl fmt::Display for ReplacePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => write!(f, "Replace"),
            Self::RequireResolve => write!(f, "Require confirm/cancel"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub replace_policy: ReplacePolicy,
}
