use crate::image_orientation::RenderError;
use image::DynamicImage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    /// In `[0, 1]`.
    pub confidence: f32,
}

impl Label {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    /// Truncated, not rounded: 0.9173 is 91.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0) as i64
    }

    pub fn to_display_string(&self) -> String {
        format!("{} {}%", self.text, self.confidence_percent())
    }
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("could not load picture: {0}")]
    Input(#[from] RenderError),

    #[error("labeling failed: {0}")]
    Labeling(String),
}

pub trait ImageClassifier: Send + Sync {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Label>, ClassifierError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_truncates_confidence() {
        assert_eq!(Label::new("Cat", 0.9173).to_display_string(), "Cat 91%");
        assert_eq!(Label::new("Dog", 0.999).to_display_string(), "Dog 99%");
        assert_eq!(Label::new("Cup", 1.0).to_display_string(), "Cup 100%");
        assert_eq!(Label::new("Sky", 0.0).to_display_string(), "Sky 0%");
    }
}
