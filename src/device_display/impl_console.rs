use crate::device_display::interface::DeviceDisplay;
use crate::outcome::Outcome;
use image::DynamicImage;
use std::error::Error;

pub struct DeviceDisplayConsole {
    target_word: Option<String>,
    photo: Option<(u32, u32)>,
    status: String,
    results: Vec<String>,
    outcome: Option<Outcome>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {
            target_word: None,
            photo: None,
            status: String::new(),
            results: Vec::new(),
            outcome: None,
        }
    }

    fn render_display(&self) {
        println!("┌──────────────────────────────┐");
        match &self.target_word {
            Some(target_word) => println!("  Find: {}", target_word),
            None => println!("  Find: ..."),
        }
        match self.photo {
            Some((width, height)) => println!("  [photo {}x{}]", width, height),
            None => println!("  [tap to take a picture]"),
        }
        println!("  {}", self.status);
        for result in &self.results {
            println!("    {}", result);
        }
        match self.outcome {
            Some(Outcome::Won) => println!("  ** You won! (d to continue) **"),
            Some(Outcome::Lost) => println!("  ** You lost! (d to continue) **"),
            None => {}
        }
        println!("└──────────────────────────────┘");
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show_target(&mut self, target_word: Option<&str>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.target_word = target_word.map(str::to_string);
        Ok(())
    }

    // The status line is drawn last by the renderer, so it redraws the screen.
    fn show_status(&mut self, status: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.status = status.to_string();
        self.render_display();
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
        self.render_display();
        Ok(())
    }

    fn show_placeholder(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.photo = None;
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("  >> {}", message);
        Ok(())
    }
}
