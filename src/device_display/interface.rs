use crate::outcome::Outcome;
use image::DynamicImage;
use std::error::Error;

/// The game screen: a target banner, a photo area, a status line, the result
/// list, a modal outcome dialog, and short-lived notices.
pub trait DeviceDisplay: Send + Sync {
    /// `None` while a new target is being picked.
    fn show_target(&mut self, target_word: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_status(&mut self, status: &str) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Formatted `"{text} {pct}%"` lines; empty hides the list.
    fn show_results(&mut self, results: &[String]) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// `None` dismisses the dialog.
    fn show_outcome(&mut self, outcome: Option<Outcome>)
        -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_photo(&mut self, image: &DynamicImage) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn show_placeholder(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn notify(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
