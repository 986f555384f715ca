use crate::device_display::interface::DeviceDisplay;
use crate::outcome::Outcome;
use image::DynamicImage;
use std::error::Error;

/// Keeps what would be on screen so tests can look at it.
#[derive(Debug, Default)]
pub struct DeviceDisplayFake {
    pub target_word: Option<String>,
    pub status: String,
    pub results: Vec<String>,
    pub outcome: Option<Outcome>,
    /// Size of the shown photo, `None` for the placeholder.
    pub photo: Option<(u32, u32)>,
    pub notices: Vec<String>,
}

impl DeviceDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show_target(&mut self, target_word: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.target_word = target_word.map(str::to_string);
        Ok(())
    }

    fn show_status(&mut self, status: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.status = status.to_string();
        Ok(())
    }

    fn show_results(&mut self, results: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.results = results.to_vec();
        Ok(())
    }

    fn show_outcome(
        &mut self,
        outcome: Option<Outcome>,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.outcome = outcome;
        Ok(())
    }

    fn show_photo(&mut self, image: &DynamicImage) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.photo = Some((image.width(), image.height()));
        Ok(())
    }

    fn show_placeholder(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.photo = None;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.notices.push(message.to_string());
        Ok(())
    }
}
