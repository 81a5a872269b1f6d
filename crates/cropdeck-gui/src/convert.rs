use cropdeck_core::compose::OutputBuffer;

/// Upload-ready copy of a rendered crop. Alpha is straight, not premultiplied.
pub fn buffer_to_color_image(buffer: &OutputBuffer) -> egui::ColorImage {
    let size = [buffer.width() as usize, buffer.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, buffer.as_raw())
}
