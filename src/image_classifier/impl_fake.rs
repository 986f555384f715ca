use crate::image_classifier::interface::{ClassifierError, ImageClassifier, Label};
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

enum Script {
    Random,
    Labels(Vec<Label>),
    Fail(String),
}

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    script: Script,
}

impl ImageClassifierFake {
    /// Answers with one to five random everyday labels.
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("image_classifier").with_namespace("fake"),
            script: Script::Random,
        }
    }

    #[allow(dead_code)]
    pub fn with_labels(logger: Arc<dyn Logger + Send + Sync>, labels: Vec<Label>) -> Self {
        Self {
            script: Script::Labels(labels),
            ..Self::new(logger)
        }
    }

    #[allow(dead_code)]
    pub fn failing(logger: Arc<dyn Logger + Send + Sync>, message: &str) -> Self {
        Self {
            script: Script::Fail(message.to_string()),
            ..Self::new(logger)
        }
    }

    fn random_labels() -> Result<Vec<Label>, ClassifierError> {
        let objects = [
            "Dog", "Cat", "Person", "Car", "Chair", "Table", "Bird", "Tree", "Bicycle", "Book",
            "Computer", "Phone", "Cup", "Bottle", "Keyboard", "Plant", "Clock", "Shoe",
        ];

        let mut rng = rand::rng();

        let count_dist = Uniform::new_inclusive(1, 5)
            .map_err(|e| ClassifierError::Labeling(e.to_string()))?;
        let index_dist = Uniform::new(0, objects.len())
            .map_err(|e| ClassifierError::Labeling(e.to_string()))?;
        let confidence_dist =
            Uniform::new(0.5f32, 1.0).map_err(|e| ClassifierError::Labeling(e.to_string()))?;

        let labels = (0..count_dist.sample(&mut rng))
            .map(|_| {
                Label::new(
                    objects[index_dist.sample(&mut rng)],
                    confidence_dist.sample(&mut rng),
                )
            })
            .collect();

        Ok(labels)
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Label>, ClassifierError> {
        let _ = self.logger.info(&format!(
            "Classifying {}x{} picture...",
            image.width(),
            image.height()
        ));

        match &self.script {
            Script::Random => Self::random_labels(),
            Script::Labels(labels) => Ok(labels.clone()),
            Script::Fail(message) => Err(ClassifierError::Labeling(message.clone())),
        }
    }
}
