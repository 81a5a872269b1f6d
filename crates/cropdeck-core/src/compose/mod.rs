mod buffer;
mod compositor;
mod mask;

pub use buffer::OutputBuffer;
pub use compositor::Compositor;
pub use mask::apply_circle_mask;
