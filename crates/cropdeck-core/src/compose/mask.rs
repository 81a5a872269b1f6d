use image::RgbaImage;

/// Clear alpha outside the circle inscribed in the image.
///
/// A pixel is kept when its centre lies within `min(w, h) / 2` of the image
/// centre.
pub fn apply_circle_mask(pixels: &mut RgbaImage) {
    let (w, h) = pixels.dimensions();
    let cx = w as f64 / 2.0;
    let cy = h as f64 / 2.0;
    let radius = w.min(h) as f64 / 2.0;
    let radius_sq = radius * radius;

    for (x, y, px) in pixels.enumerate_pixels_mut() {
        let dx = x as f64 + 0.5 - cx;
        let dy = y as f64 + 0.5 - cy;
        if dx * dx + dy * dy > radius_sq {
            px.0[3] = 0;
        }
    }
}
