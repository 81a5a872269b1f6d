/// Texture mirror of the session's live preview.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
    /// Output size in pixels (the preset's dimensions).
    pub image_size: Option<[usize; 2]>,
    /// Set whenever the session re-rendered and the texture is stale.
    pub dirty: bool,
}

impl PreviewState {
    pub fn clear(&mut self) {
        self.texture = None;
        self.image_size = None;
        self.dirty = false;
    }
}
