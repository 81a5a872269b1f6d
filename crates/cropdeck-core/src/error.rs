use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error("Render failed: {0}")]
    Render(String),

    #[error("Could not encode image: {0}")]
    Encode(String),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("A crop session is already in progress; confirm or cancel it first")]
    SessionBusy,

    #[error("No crop session is active")]
    NoActiveSession,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CropError>;
