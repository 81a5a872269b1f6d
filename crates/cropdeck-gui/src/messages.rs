use std::path::PathBuf;

use cropdeck_core::config::CropConfig;

/// Results reported back from file-dialog threads.
pub enum DialogResult {
    /// An image file was picked and read.
    ImagePicked { path: PathBuf, bytes: Vec<u8> },
    /// A save location was chosen for a confirmed crop.
    SaveTarget { index: usize, path: PathBuf },
    ConfigImported { path: PathBuf, config: CropConfig },
    ConfigExported { path: PathBuf },
    Error { message: String },
}
