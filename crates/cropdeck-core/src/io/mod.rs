pub mod export;
pub mod loader;

pub use export::{decode_data_uri, encode, EncodedImage, ExportFormat};
pub use loader::{load, load_data_uri, load_path, SourceImage};
