pub mod cover_fit;
pub mod sample;

pub use cover_fit::{cover_fit, CoverFitRect};
pub use sample::SampleRect;
