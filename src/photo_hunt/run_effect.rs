use crate::config::Config;
use crate::device_camera::interface::{CaptureError, DeviceCamera};
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::{ClassifierError, ImageClassifier, Label};
use crate::image_orientation;
use crate::library::logger::interface::Logger;
use crate::photo_hunt::core::{Effect, Event};
use crate::picture_store;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Clone)]
pub struct RunEffect {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl RunEffect {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger,
            device_camera,
            device_display,
            image_classifier,
        }
    }

    pub fn run_effect(&self, effect: Effect, event_sender: Sender<Event>) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::PickTarget => {
                let now = chrono::Local::now();
                match self.config.target_pick.pick(&self.config.word_list, &now) {
                    Some(target_word) => {
                        let _ = event_sender.send(Event::TargetPicked(target_word.to_string()));
                    }
                    None => {
                        let _ = self.logger.error("Word list is empty, nothing to pick");
                    }
                }
            }
            Effect::CaptureImage => {
                let captured = self.capture_image();
                let _ = event_sender.send(Event::CaptureDone(captured));
            }
            Effect::ShowCapture { path } => match image_orientation::render(&path) {
                Ok(image) => {
                    if let Err(e) = self.display().show_photo(&image) {
                        let _ = self.logger.error(&format!("Could not show picture: {}", e));
                    }
                }
                Err(e) => {
                    let _ = self.logger.error(&format!("Could not render picture: {}", e));
                }
            },
            Effect::ClassifyImage { path } => {
                let labels = self.classify_image(&path);
                if let Err(e) = &labels {
                    let _ = self.logger.error(&format!("Classification failed: {}", e));
                }
                let _ = event_sender.send(Event::ClassifyDone(labels));
            }
            Effect::DeleteImage { path } => self.delete_image(&path),
            Effect::ShowPlaceholder => {
                if let Err(e) = self.display().show_placeholder() {
                    let _ = self.logger.error(&format!("Could not reset picture: {}", e));
                }
            }
            Effect::Notify { message } => {
                if let Err(e) = self.display().notify(&message) {
                    let _ = self.logger.error(&format!("Could not show notice: {}", e));
                }
            }
        }
    }

    fn display(&self) -> std::sync::MutexGuard<'_, dyn DeviceDisplay + Send + Sync + 'static> {
        self.device_display
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The file belongs to this effect until the capture succeeds; a failed
    /// capture removes it before reporting.
    fn capture_image(&self) -> Result<PathBuf, CaptureError> {
        let path = match picture_store::create_image_file(&self.config.picture_dir) {
            Ok(path) => path,
            Err(error) => {
                let _ = self.logger.error(&format!(
                    "Could not create picture file in {}: {}",
                    self.config.picture_dir.display(),
                    error
                ));
                return Err(error.into());
            }
        };

        if let Err(error) = self.device_camera.capture(&path) {
            let _ = self.logger.error(&format!("Capture failed: {}", error));
            self.delete_image(&path);
            return Err(error);
        }

        let _ = self
            .logger
            .info(&format!("Image location: {}", path.display()));

        Ok(path)
    }

    fn classify_image(&self, path: &Path) -> Result<Vec<Label>, ClassifierError> {
        let image = image_orientation::render(path)?;
        self.image_classifier.classify(&image)
    }

    fn delete_image(&self, path: &Path) {
        match picture_store::delete_image_file(path) {
            Ok(true) => {
                let _ = self
                    .logger
                    .info(&format!("Deleted {}", path.display()));
            }
            Ok(false) => {
                let _ = self
                    .logger
                    .info(&format!("{} was already gone", path.display()));
            }
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Could not delete {}: {}", path.display(), e));
            }
        }
    }
}
