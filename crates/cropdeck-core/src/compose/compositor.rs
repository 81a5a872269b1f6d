use image::RgbaImage;
use rayon::prelude::*;

use super::buffer::OutputBuffer;
use super::mask::apply_circle_mask;
use crate::config::{RenderConfig, ResampleFilter};
use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{CropError, Result};
use crate::geometry::{cover_fit, SampleRect};
use crate::io::SourceImage;
use crate::preset::{MaskShape, Preset};
use crate::viewport::ViewportState;

/// Maps output pixel centres into source coordinates.
#[derive(Clone, Copy, Debug)]
struct Mapping {
    origin_x: f64,
    origin_y: f64,
    scale_x: f64,
    scale_y: f64,
}

/// Resolves cover-fit + viewport into a fixed-size output buffer.
///
/// Every render starts from scratch: nothing about the previous frame is
/// reused, so rendering unchanged state always yields identical pixels.
#[derive(Clone, Debug, Default)]
pub struct Compositor {
    config: RenderConfig,
}

impl Compositor {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Sampled source rectangle for the given state.
    pub fn sample_rect(
        &self,
        source: &SourceImage,
        preset: &Preset,
        viewport: &ViewportState,
    ) -> Result<SampleRect> {
        let cover = cover_fit(source.width(), source.height(), preset.width, preset.height)?;
        Ok(SampleRect::resolve(&cover, viewport))
    }

    pub fn render(
        &self,
        source: &SourceImage,
        preset: &Preset,
        viewport: &ViewportState,
    ) -> Result<OutputBuffer> {
        let sample = self.sample_rect(source, preset, viewport)?;
        self.render_rect(source, preset, &sample)
    }

    /// Resample `sample` onto a `preset`-sized buffer.
    pub fn render_rect(
        &self,
        source: &SourceImage,
        preset: &Preset,
        sample: &SampleRect,
    ) -> Result<OutputBuffer> {
        if !sample.is_finite() || sample.width <= 0.0 || sample.height <= 0.0 {
            return Err(CropError::Render(format!(
                "degenerate sample rectangle {sample:?}"
            )));
        }

        let (out_w, out_h) = preset.dimensions();
        if out_w == 0 || out_h == 0 {
            return Err(CropError::InvalidDimensions {
                width: out_w,
                height: out_h,
            });
        }

        let mapping = Mapping {
            origin_x: sample.x,
            origin_y: sample.y,
            scale_x: sample.width / out_w as f64,
            scale_y: sample.height / out_h as f64,
        };

        let pixel_count = out_w as usize * out_h as usize;
        let mut raw = self.config.background.repeat(pixel_count);
        let row_bytes = out_w as usize * 4;
        let src = source.pixels();

        if pixel_count >= PARALLEL_PIXEL_THRESHOLD {
            raw.par_chunks_mut(row_bytes)
                .enumerate()
                .for_each(|(row, line)| self.render_row(src, &mapping, row, line));
        } else {
            raw.chunks_mut(row_bytes)
                .enumerate()
                .for_each(|(row, line)| self.render_row(src, &mapping, row, line));
        }

        let mut pixels = RgbaImage::from_raw(out_w, out_h, raw).ok_or_else(|| {
            CropError::Render(format!("output buffer does not match {out_w}x{out_h}"))
        })?;

        if self.config.bake_circle_mask && preset.mask == MaskShape::Circle {
            apply_circle_mask(&mut pixels);
        }

        Ok(OutputBuffer::new(pixels))
    }

    /// Fill one output row. Pixels whose centre maps outside the source keep
    /// the background already in `line`.
    fn render_row(&self, src: &RgbaImage, mapping: &Mapping, row: usize, line: &mut [u8]) {
        let (src_w, src_h) = src.dimensions();
        let sy = mapping.origin_y + (row as f64 + 0.5) * mapping.scale_y;
        if sy < 0.0 || sy >= src_h as f64 {
            return;
        }

        for (col, px) in line.chunks_exact_mut(4).enumerate() {
            let sx = mapping.origin_x + (col as f64 + 0.5) * mapping.scale_x;
            if sx < 0.0 || sx >= src_w as f64 {
                continue;
            }

            let sampled = match self.config.filter {
                ResampleFilter::Nearest => sample_nearest(src, sx, sy),
                ResampleFilter::Bilinear => sample_bilinear(src, sx, sy),
            };
            let background = [px[0], px[1], px[2], px[3]];
            px.copy_from_slice(&blend_over(sampled, background));
        }
    }
}

fn sample_nearest(src: &RgbaImage, sx: f64, sy: f64) -> [f32; 4] {
    let x = (sx.floor() as u32).min(src.width() - 1);
    let y = (sy.floor() as u32).min(src.height() - 1);
    let p = src.get_pixel(x, y).0;
    [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
}

/// Bilinear sample at a continuous position; taps beyond the edge are clamped.
fn sample_bilinear(src: &RgbaImage, sx: f64, sy: f64) -> [f32; 4] {
    let (w, h) = src.dimensions();
    let fx = (sx - 0.5).clamp(0.0, (w - 1) as f64);
    let fy = (sy - 0.5).clamp(0.0, (h - 1) as f64);

    let x0 = fx.floor() as u32;
    let y0 = fy.floor() as u32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let tx = (fx - x0 as f64) as f32;
    let ty = (fy - y0 as f64) as f32;

    let p00 = src.get_pixel(x0, y0).0;
    let p10 = src.get_pixel(x1, y0).0;
    let p01 = src.get_pixel(x0, y1).0;
    let p11 = src.get_pixel(x1, y1).0;

    let mut out = [0.0f32; 4];
    for c in 0..4 {
        let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
        let bottom = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
        out[c] = top * (1.0 - ty) + bottom * ty;
    }
    out
}

/// Source-over compositing of a sampled pixel onto the background.
fn blend_over(src: [f32; 4], background: [u8; 4]) -> [u8; 4] {
    let alpha = src[3] / 255.0;
    if alpha >= 1.0 {
        return [
            src[0].round() as u8,
            src[1].round() as u8,
            src[2].round() as u8,
            255,
        ];
    }

    let inv = 1.0 - alpha;
    let bg_alpha = background[3] as f32 / 255.0;
    let out_alpha = alpha + bg_alpha * inv;
    if out_alpha <= 0.0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let v = (src[c] * alpha + background[c] as f32 * bg_alpha * inv) / out_alpha;
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
    out
}
