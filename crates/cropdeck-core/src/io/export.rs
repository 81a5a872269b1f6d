use std::fmt;
use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::compose::OutputBuffer;
use crate::error::{CropError, Result};

/// Lossless container for the finished crop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Tiff,
}

impl ExportFormat {
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Tiff => "image/tiff",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Tiff => "tiff",
        }
    }

    fn image_format(&self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Tiff => ImageFormat::Tiff,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Png => write!(f, "PNG"),
            Self::Tiff => write!(f, "TIFF"),
        }
    }
}

/// A self-describing encoded payload, ready to persist or render as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    pub format: ExportFormat,
    pub width: u32,
    pub height: u32,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    /// `data:<mime>;base64,<payload>`, the form the form-filling UI stores.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime(), STANDARD.encode(&self.bytes))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        Ok(())
    }
}

/// Serialize a finished output buffer.
pub fn encode(buffer: &OutputBuffer, format: ExportFormat) -> Result<EncodedImage> {
    let mut bytes = Vec::new();
    buffer
        .pixels()
        .write_to(&mut Cursor::new(&mut bytes), format.image_format())
        .map_err(|e| CropError::Encode(e.to_string()))?;

    Ok(EncodedImage {
        format,
        width: buffer.width(),
        height: buffer.height(),
        bytes,
    })
}

/// Split a base64 data URI into its MIME type and decoded payload.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>)> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| CropError::Decode("missing data: prefix".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CropError::Decode("missing ',' separator in data URI".into()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| CropError::Decode("only base64 data URIs are supported".into()))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| CropError::Decode(format!("invalid base64 payload: {e}")))?;
    Ok((mime.to_string(), bytes))
}
