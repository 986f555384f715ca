use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::photo_hunt::core::{init, is_background, is_stopped, transition, Effect, Event, State};
use crate::photo_hunt::render::Render;
use crate::photo_hunt::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

pub struct PhotoHunt {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    event_sender: Sender<Event>,
    event_receiver: Receiver<Event>,
}

impl PhotoHunt {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("photo_hunt"),
            device_camera,
            device_display,
            image_classifier,
            event_sender,
            event_receiver,
        }
    }

    /// Where the player's actions (capture, submit, dismiss, quit) go.
    pub fn event_sender(&self) -> Sender<Event> {
        self.event_sender.clone()
    }

    /// Plays rounds until [`Event::Quit`] arrives.
    pub fn run(self) -> Result<State, Box<dyn std::error::Error + Send + Sync>> {
        let transition_logger = self.logger.with_namespace("core");
        let render_logger = self.logger.with_namespace("render");

        let render = Render::new(self.device_display.clone());
        let run_effect = RunEffect::new(
            self.config.clone(),
            self.logger.with_namespace("run_effect"),
            self.device_camera.clone(),
            self.device_display.clone(),
            self.image_classifier.clone(),
        );

        let state_machine = StateMachine::new(
            init(),
            move |state: State, event: Event| {
                let _ = transition_logger.info(&format!("event: {:?}", event));
                let (new_state, effects) = transition(state, event);
                let _ = transition_logger.info(&format!(
                    "new state: {:?} effects: {:?}",
                    new_state, effects
                ));
                (new_state, effects)
            },
            move |state: &State| {
                if let Err(e) = render.render(state) {
                    let _ = render_logger.error(&format!("Render failed: {}", e));
                }
            },
            move |effect: Effect, event_sender: Sender<Event>| {
                run_effect.run_effect(effect, event_sender)
            },
            is_stopped,
            is_background,
        );

        let _ = self.logger.info("Starting");

        let final_state = state_machine.run(self.event_sender, self.event_receiver)?;

        let _ = self.logger.info("Stopped");

        Ok(final_state)
    }
}
