use crate::device_display::interface::DeviceDisplay;
use crate::outcome::Outcome;
use crate::photo_hunt::core::State;
use std::sync::{Arc, Mutex, PoisonError};

/// Draws the text parts of the screen from the state. The photo area is
/// driven by effects because it needs to read the picture from disk.
#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut device_display = self
            .device_display
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match state {
            State::PickingTarget => {
                device_display.show_target(None)?;
                device_display.show_results(&[])?;
                device_display.show_outcome(None)?;
                device_display.show_status("Picking something to find...")?;
            }
            State::Idle { session } => {
                device_display.show_target(Some(session.target_word.as_str()))?;
                device_display.show_results(&[])?;
                device_display.show_outcome(None)?;
                device_display.show_status("Take a picture of it")?;
            }
            State::Capturing { session } => {
                device_display.show_target(Some(session.target_word.as_str()))?;
                device_display.show_status("Taking a picture...")?;
            }
            State::Captured { session } => {
                device_display.show_target(Some(session.target_word.as_str()))?;
                device_display.show_results(&[])?;
                device_display.show_status("Submit to check your picture")?;
            }
            State::Classifying { session } => {
                device_display.show_target(Some(session.target_word.as_str()))?;
                device_display.show_status("Checking your picture...")?;
            }
            State::Won { session, results } => {
                device_display.show_target(Some(session.target_word.as_str()))?;
                device_display.show_results(results)?;
                device_display.show_outcome(Some(Outcome::Won))?;
                device_display.show_status("Found it!")?;
            }
            State::Lost { session, results } => {
                device_display.show_target(Some(session.target_word.as_str()))?;
                device_display.show_results(results)?;
                device_display.show_outcome(Some(Outcome::Lost))?;
                device_display.show_status("That is not it")?;
            }
            State::Stopping { .. } => {
                device_display.show_status("Finishing the picture before quitting...")?;
            }
            State::Stopped => {
                device_display.show_outcome(None)?;
                device_display.show_status("Bye")?;
            }
        }

        Ok(())
    }
}
