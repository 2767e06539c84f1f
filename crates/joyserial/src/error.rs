use thiserror::Error;

use joyserial_input::HatIndex;
use joyserial_profile::{ControlError, ProfileError};

/// Fatal errors that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("input error: {0}")]
    Input(#[from] joyserial_input::Error),
    /// The attached joystick is not the configured model.
    #[error("\"{expected}\" was not found, connected device is \"{found}\"")]
    DeviceMismatch { expected: String, found: String },
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to set interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error("polling thread exited unexpectedly")]
    WorkerExited,
}

/// Failure while handling a single event. Never fatal.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Control(#[from] ControlError),
    #[error("no directional pad configured for hat {0}")]
    UnknownHat(HatIndex),
    #[error("failed to write line: {0}")]
    Sink(#[from] std::io::Error),
}
