use crate::device_camera::interface::{CaptureError, DeviceCamera};
use crate::image_orientation::with_exif_orientation;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

enum Fault {
    Cancel,
    Device(String),
}

/// Writes a synthetic landscape JPEG tagged the way a phone held upright tags
/// its sensor output (EXIF orientation 6, rotate 90).
pub struct DeviceCameraFake {
    logger: Arc<dyn Logger + Send + Sync>,
    width: u32,
    height: u32,
    orientation: Option<u8>,
    delay: Duration,
    fault: Option<Fault>,
}

impl DeviceCameraFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("camera").with_namespace("fake"),
            width: 64,
            height: 48,
            orientation: Some(6),
            delay: Duration::ZERO,
            fault: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_orientation(mut self, orientation: Option<u8>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Every capture behaves like the player backing out of the camera.
    #[allow(dead_code)]
    pub fn cancelling(mut self) -> Self {
        self.fault = Some(Fault::Cancel);
        self
    }

    #[allow(dead_code)]
    pub fn failing(mut self, message: &str) -> Self {
        self.fault = Some(Fault::Device(message.to_string()));
        self
    }

    /// How long the shutter takes before anything is written.
    #[allow(dead_code)]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn frame(&self) -> DynamicImage {
        let (width, height) = (self.width, self.height);
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                96,
            ])
        }))
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn capture(&self, destination: &Path) -> Result<(), CaptureError> {
        let _ = self.logger.info("Capturing picture...");

        std::thread::sleep(self.delay);

        match &self.fault {
            Some(Fault::Cancel) => return Err(CaptureError::Cancelled),
            Some(Fault::Device(message)) => return Err(CaptureError::Device(message.clone())),
            None => {}
        }

        let mut jpeg = Cursor::new(Vec::new());
        self.frame().write_to(&mut jpeg, ImageFormat::Jpeg)?;

        let bytes = match self.orientation {
            Some(orientation) => with_exif_orientation(jpeg.get_ref(), orientation),
            None => jpeg.into_inner(),
        };

        std::fs::write(destination, bytes)?;

        let _ = self
            .logger
            .info(&format!("Picture written to {}", destination.display()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_orientation::render;
    use crate::library::logger::impl_console::LoggerConsole;
    use chrono::FixedOffset;

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(FixedOffset::east_opt(0).unwrap()))
    }

    #[test]
    fn test_capture_writes_rotated_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.jpg");

        DeviceCameraFake::new(logger()).capture(&path).unwrap();

        let raw = image::open(&path).unwrap();
        assert_eq!((raw.width(), raw.height()), (64, 48));
        let upright = render(&path).unwrap();
        assert_eq!((upright.width(), upright.height()), (48, 64));
    }

    #[test]
    fn test_untagged_capture_stays_landscape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.jpg");

        DeviceCameraFake::new(logger())
            .with_orientation(None)
            .capture(&path)
            .unwrap();

        let upright = render(&path).unwrap();
        assert_eq!((upright.width(), upright.height()), (64, 48));
    }

    #[test]
    fn test_cancelled_capture_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.jpg");

        let result = DeviceCameraFake::new(logger()).cancelling().capture(&path);

        assert!(matches!(result, Err(CaptureError::Cancelled)));
        assert!(!path.exists());
    }

    #[test]
    fn test_device_failure_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.jpg");

        let result = DeviceCameraFake::new(logger())
            .failing("lens covered")
            .capture(&path);

        match result {
            Err(CaptureError::Device(message)) => assert_eq!(message, "lens covered"),
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(!path.exists());
    }
}
