mod button;
mod dpad;
mod stick;

use std::fmt;

use thiserror::Error;

use joyserial_input::{AxisIndex, InputEvent};

pub use button::ButtonControl;
pub use dpad::{Direction, DpadControl};
pub use stick::{AxisField, AxisPairControl, AxisReadout, AxisState};

/// Error boxed out of a user handler.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by control handlers.
pub type HandlerResult = Result<(), HandlerError>;

/// Capability invoked synchronously when a control receives an event.
pub trait ControlHandler: Send {
    fn on_event(&mut self, event: &InputEvent) -> HandlerResult;
}

impl<F> ControlHandler for F
where
    F: FnMut(&InputEvent) -> HandlerResult + Send,
{
    fn on_event(&mut self, event: &InputEvent) -> HandlerResult {
        self(event)
    }
}

/// An owned handler attached to a control.
pub struct Handler(Box<dyn ControlHandler>);

impl Handler {
    pub fn new(handler: impl ControlHandler + 'static) -> Self {
        Self(Box::new(handler))
    }

    /// Wraps a closure; spelled out so closure signatures infer.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(&InputEvent) -> HandlerResult + Send + 'static,
    {
        Self(Box::new(f))
    }

    pub(crate) fn call(&mut self, control: &str, event: &InputEvent) -> Result<(), ControlError> {
        self.0
            .on_event(event)
            .map_err(|source| ControlError::Handler {
                control: control.into(),
                source,
            })
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

/// Failures raised by controls while handling one event.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The axis belongs to another stick. Expected while searching for the owner.
    #[error("axis {axis} is not connected to {control}")]
    UnrelatedAxis { control: Box<str>, axis: AxisIndex },
    #[error("handler of {control} failed: {source}")]
    Handler {
        control: Box<str>,
        #[source]
        source: HandlerError,
    },
}

impl ControlError {
    pub fn is_unrelated_axis(&self) -> bool {
        matches!(self, ControlError::UnrelatedAxis { .. })
    }
}
