use crate::device_camera::interface::CaptureError;
use crate::image_classifier::interface::{ClassifierError, Label};
use crate::outcome::{evaluate, Outcome};
use std::path::PathBuf;

pub const NO_PICTURE_MESSAGE: &str = "You need to take a picture first!";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub target_word: String,
    pub captured_image: Option<PathBuf>,
    /// Filled by a classification result and emptied as soon as it is evaluated.
    pub labels: Vec<Label>,
}

impl Session {
    pub fn new(target_word: String) -> Self {
        Self {
            target_word,
            captured_image: None,
            labels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    PickingTarget,
    Idle {
        session: Session,
    },
    Capturing {
        session: Session,
    },
    Captured {
        session: Session,
    },
    Classifying {
        session: Session,
    },
    Won {
        session: Session,
        results: Vec<String>,
    },
    Lost {
        session: Session,
        results: Vec<String>,
    },
    /// Quit arrived while the camera was busy. The picture it is writing
    /// still has to be deleted.
    Stopping {
        session: Session,
    },
    Stopped,
}

#[derive(Debug)]
pub enum Event {
    TargetPicked(String),
    CapturePressed,
    CaptureDone(Result<PathBuf, CaptureError>),
    SubmitPressed,
    ClassifyDone(Result<Vec<Label>, ClassifierError>),
    DismissPressed,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PickTarget,
    CaptureImage,
    ShowCapture { path: PathBuf },
    ClassifyImage { path: PathBuf },
    DeleteImage { path: PathBuf },
    ShowPlaceholder,
    Notify { message: String },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::PickingTarget, vec![Effect::PickTarget])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state, event) {
        (State::PickingTarget, Event::TargetPicked(target_word)) => (
            State::Idle {
                session: Session::new(target_word),
            },
            vec![],
        ),

        // Capture
        (State::Idle { session }, Event::CapturePressed)
        | (State::Captured { session }, Event::CapturePressed) => {
            (State::Capturing { session }, vec![Effect::CaptureImage])
        }
        (State::Capturing { mut session }, Event::CaptureDone(Ok(path))) => {
            let mut effects = vec![Effect::ShowCapture { path: path.clone() }];
            if let Some(previous) = session.captured_image.replace(path) {
                effects.push(Effect::DeleteImage { path: previous });
            }
            (State::Captured { session }, effects)
        }
        (State::Capturing { session }, Event::CaptureDone(Err(_))) => {
            if session.captured_image.is_some() {
                (State::Captured { session }, vec![])
            } else {
                (State::Idle { session }, vec![])
            }
        }

        // Submit
        (State::Captured { session }, Event::SubmitPressed) => match session.captured_image.clone() {
            Some(path) => (
                State::Classifying { session },
                vec![Effect::ClassifyImage { path }],
            ),
            None => (State::Captured { session }, vec![no_picture_notice()]),
        },
        (State::Idle { session }, Event::SubmitPressed) => {
            (State::Idle { session }, vec![no_picture_notice()])
        }
        (State::Capturing { session }, Event::SubmitPressed)
            if session.captured_image.is_none() =>
        {
            (State::Capturing { session }, vec![no_picture_notice()])
        }

        // Classification result
        (State::Classifying { mut session }, Event::ClassifyDone(Ok(labels))) => {
            session.labels = labels;
            let results: Vec<String> = session
                .labels
                .iter()
                .map(Label::to_display_string)
                .collect();
            let outcome = evaluate(&results, &session.target_word);
            session.labels.clear();

            match outcome {
                Outcome::Won => (State::Won { session, results }, vec![]),
                Outcome::Lost => (State::Lost { session, results }, vec![]),
            }
        }
        (State::Classifying { session }, Event::ClassifyDone(Err(error))) => (
            State::Captured { session },
            vec![Effect::Notify {
                message: format!("Could not check your picture: {}", error),
            }],
        ),

        // Round reset
        (State::Won { session, .. }, Event::DismissPressed)
        | (State::Lost { session, .. }, Event::DismissPressed) => {
            let mut effects = vec![];
            if let Some(path) = session.captured_image {
                effects.push(Effect::DeleteImage { path });
            }
            effects.push(Effect::ShowPlaceholder);
            effects.push(Effect::PickTarget);
            (State::PickingTarget, effects)
        }

        // Quit
        (State::Capturing { session }, Event::Quit) => {
            let effects = session
                .captured_image
                .clone()
                .map(|path| vec![Effect::DeleteImage { path }])
                .unwrap_or_default();
            (State::Stopping { session }, effects)
        }
        (State::Stopping { .. }, Event::CaptureDone(Ok(path))) => {
            (State::Stopped, vec![Effect::DeleteImage { path }])
        }
        (State::Stopping { .. }, Event::CaptureDone(Err(_))) => (State::Stopped, vec![]),
        (State::Stopping { session }, Event::Quit) => (State::Stopping { session }, vec![]),
        (state, Event::Quit) => {
            let effects = current_session(&state)
                .and_then(|session| session.captured_image.clone())
                .map(|path| vec![Effect::DeleteImage { path }])
                .unwrap_or_default();
            (State::Stopped, effects)
        }

        (state, _) => (state, vec![]),
    }
}

pub fn current_session(state: &State) -> Option<&Session> {
    match state {
        State::Idle { session }
        | State::Capturing { session }
        | State::Captured { session }
        | State::Classifying { session }
        | State::Won { session, .. }
        | State::Lost { session, .. }
        | State::Stopping { session } => Some(session),
        State::PickingTarget | State::Stopped => None,
    }
}

pub fn is_stopped(state: &State) -> bool {
    matches!(state, State::Stopped)
}

/// Effects that wait on a device and must not hold up the event loop. The
/// rest run in order on the loop thread.
pub fn is_background(effect: &Effect) -> bool {
    matches!(effect, Effect::CaptureImage | Effect::ClassifyImage { .. })
}

fn no_picture_notice() -> Effect {
    Effect::Notify {
        message: NO_PICTURE_MESSAGE.to_string(),
    }
}
