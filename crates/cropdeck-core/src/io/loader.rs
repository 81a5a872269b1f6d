use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader, Limits, RgbaImage};
use tracing::{debug, info};

use crate::config::LoaderConfig;
use crate::error::{CropError, Result};
use crate::io::export::decode_data_uri;

/// A decoded upload, held as RGBA8 for the lifetime of one crop session.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pixels: RgbaImage,
    format: Option<ImageFormat>,
}

impl SourceImage {
    /// Wrap already-decoded pixels. Zero-sized images are rejected.
    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CropError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels,
            format: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Container format the bytes were decoded from, if known.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

fn decode_error(e: impl std::fmt::Display) -> CropError {
    CropError::Decode(e.to_string())
}

/// Decode uploaded or captured bytes into a [`SourceImage`].
///
/// The format is sniffed from the leading bytes, so the file name or MIME
/// type of the upload is never trusted.
pub fn load(bytes: &[u8], config: &LoaderConfig) -> Result<SourceImage> {
    if bytes.is_empty() {
        return Err(CropError::Decode("input is empty".into()));
    }

    let mut reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(decode_error)?;
    let format = reader
        .format()
        .ok_or_else(|| CropError::Decode("unrecognised image format".into()))?;

    let mut limits = Limits::default();
    limits.max_image_width = Some(config.max_dimension);
    limits.max_image_height = Some(config.max_dimension);
    reader.limits(limits);

    let mut decoder = reader.into_decoder().map_err(decode_error)?;
    let orientation = if config.apply_orientation {
        decoder.orientation().ok()
    } else {
        None
    };
    let mut image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
    if let Some(orientation) = orientation {
        image.apply_orientation(orientation);
    }

    let pixels = image.to_rgba8();
    let (width, height) = pixels.dimensions();
    if width == 0 || height == 0 {
        return Err(CropError::InvalidDimensions { width, height });
    }

    debug!(?format, width, height, "Decoded source image");
    Ok(SourceImage {
        pixels,
        format: Some(format),
    })
}

/// Decode a `data:image/...;base64,` string.
pub fn load_data_uri(uri: &str, config: &LoaderConfig) -> Result<SourceImage> {
    let (mime, bytes) = decode_data_uri(uri)?;
    if !mime.starts_with("image/") {
        return Err(CropError::Decode(format!("not an image data URI: {mime}")));
    }
    load(&bytes, config)
}

/// Read and decode an image file.
pub fn load_path(path: &Path, config: &LoaderConfig) -> Result<SourceImage> {
    let bytes = std::fs::read(path)?;
    let image = load(&bytes, config)?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Loaded image"
    );
    Ok(image)
}
