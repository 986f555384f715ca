use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture cancelled")]
    Cancelled,

    #[error("camera error: {0}")]
    Device(String),

    #[error("could not write picture: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode picture: {0}")]
    Encode(#[from] image::ImageError),
}

pub trait DeviceCamera: Send + Sync {
    /// Takes a picture and writes it as a JPEG to `destination`.
    fn capture(&self, destination: &Path) -> Result<(), CaptureError>;
}
