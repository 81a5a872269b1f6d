use super::cover_fit::CoverFitRect;
use crate::viewport::ViewportState;

/// The sub-rectangle of the source that ends up stretched over the output.
///
/// May extend past the source bounds at high zoom with a large pan; the
/// compositor fills that part with background instead of clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SampleRect {
    /// Apply zoom (about the cover-fit centre) and pan to a cover-fit rectangle.
    pub fn resolve(cover: &CoverFitRect, viewport: &ViewportState) -> Self {
        let zoom = viewport.zoom();
        let (pan_x, pan_y) = viewport.pan();

        let width = cover.width / zoom;
        let height = cover.height / zoom;
        let centered_x = cover.offset_x + (cover.width - width) / 2.0;
        let centered_y = cover.offset_y + (cover.height - height) / 2.0;

        Self {
            x: centered_x - pan_x / zoom,
            y: centered_y - pan_y / zoom,
            width,
            height,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }

    /// True when every part of the rectangle lies inside a `w`×`h` source.
    pub fn within(&self, source_width: u32, source_height: u32) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.x + self.width <= source_width as f64
            && self.y + self.height <= source_height as f64
    }
}
