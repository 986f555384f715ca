use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use image_classifier::impl_fake::ImageClassifierFake;
use library::logger::impl_console::LoggerConsole;
use photo_hunt::core::Event;
use photo_hunt::main::PhotoHunt;
use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_display;
mod image_classifier;
mod image_orientation;
mod library;
mod outcome;
mod photo_hunt;
mod picture_store;
mod target_selector;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));

    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    let image_classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

    let photo_hunt = PhotoHunt::new(
        config,
        logger,
        device_camera,
        device_display,
        image_classifier,
    );

    let event_sender = photo_hunt.event_sender();
    std::thread::spawn(move || read_commands(event_sender));

    photo_hunt.run()?;

    Ok(())
}

/// c = take picture, s = submit, d = dismiss, q = quit.
fn read_commands(event_sender: Sender<Event>) {
    println!("Commands: c = take picture, s = submit, d = dismiss, q = quit");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };

        let event = match line.trim() {
            "c" => Event::CapturePressed,
            "s" => Event::SubmitPressed,
            "d" => Event::DismissPressed,
            "q" => Event::Quit,
            other => {
                println!("Unknown command: {:?}", other);
                continue;
            }
        };

        let quit = matches!(event, Event::Quit);
        if event_sender.send(event).is_err() || quit {
            return;
        }
    }

    let _ = event_sender.send(Event::Quit);
}
