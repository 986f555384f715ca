use chrono::Utc;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Creates an empty `file_<millis>*.jpg` in `dir` for the camera to write into.
/// The file is kept on disk until [`delete_image_file`] removes it.
pub fn create_image_file(dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let prefix = format!("file_{}", Utc::now().timestamp_millis());
    let file = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(".jpg")
        .tempfile_in(dir)?;

    let (_, path) = file.keep()?;

    Ok(path)
}

/// Returns `false` if the file was already gone.
pub fn delete_image_file(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error),
    }
}
