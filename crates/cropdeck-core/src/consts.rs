/// Minimum output pixel count (w*h) to render rows in parallel with Rayon.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Lower zoom bound. 1.0 already shows the full cover-fit rectangle.
pub const MIN_ZOOM: f64 = 1.0;

/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 5.0;

/// Zoom slider granularity.
pub const ZOOM_STEP: f64 = 0.1;

/// Opaque white, the fill for any sample that lands outside the source image.
pub const DEFAULT_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Largest accepted source width or height, in pixels.
pub const DEFAULT_MAX_SOURCE_DIMENSION: u32 = 16_384;

/// Fallback output shape for unknown preset tags (the generic banner).
pub const GENERIC_PRESET_WIDTH: u32 = 1200;
pub const GENERIC_PRESET_HEIGHT: u32 = 300;
