use crate::error::{CropError, Result};

/// Maximal centered rectangle, in source coordinates, with the target's
/// aspect ratio and fully inside the source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFitRect {
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Compute the cover-fit ("fill", never letterboxed) crop for a target shape.
///
/// If the source is relatively wider than the target, the full source height
/// is kept and the sides are trimmed; otherwise the full width is kept and the
/// top and bottom are trimmed.
pub fn cover_fit(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> Result<CoverFitRect> {
    if source_width == 0 || source_height == 0 {
        return Err(CropError::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }
    if target_width == 0 || target_height == 0 {
        return Err(CropError::InvalidDimensions {
            width: target_width,
            height: target_height,
        });
    }

    let src_w = source_width as f64;
    let src_h = source_height as f64;
    let source_aspect = src_w / src_h;
    let target_aspect = target_width as f64 / target_height as f64;

    let rect = if source_aspect > target_aspect {
        let width = src_h * target_aspect;
        CoverFitRect {
            offset_x: (src_w - width) / 2.0,
            offset_y: 0.0,
            width,
            height: src_h,
        }
    } else {
        let height = src_w / target_aspect;
        CoverFitRect {
            offset_x: 0.0,
            offset_y: (src_h - height) / 2.0,
            width: src_w,
            height,
        }
    };

    Ok(rect)
}
