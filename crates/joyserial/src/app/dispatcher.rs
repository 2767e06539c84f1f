use colored::Colorize;

use joyserial_input::{AxisIndex, ButtonIndex, HatIndex, HatValue, InputEvent};
use joyserial_profile::DeviceConfig;

use crate::error::DispatchError;
use crate::print_debug;
use crate::sink::LineSink;

/// What the polling loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Routes events to the controls of one device and writes their output.
///
/// At most one line is emitted per event: the first control in configuration
/// order that produces text wins.
pub struct Dispatcher<S> {
    config: DeviceConfig,
    sink: S,
}

impl<S: LineSink> Dispatcher<S> {
    pub fn new(config: DeviceConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn device_name(&self) -> &str {
        self.config.name()
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Handles one event. Failures are logged and swallowed.
    pub fn dispatch(&mut self, event: &InputEvent) -> Flow {
        match self.try_dispatch(event) {
            Ok(flow) => flow,
            Err(e) => {
                print_debug!("failed to handle {} event: {e}", event.kind());
                Flow::Continue
            }
        }
    }

    pub fn try_dispatch(&mut self, event: &InputEvent) -> Result<Flow, DispatchError> {
        let line = match event {
            InputEvent::ButtonDown { button } => self.on_button(*button, event, true)?,
            InputEvent::ButtonUp { button } => self.on_button(*button, event, false)?,
            InputEvent::AxisMotion { axis, value } => {
                self.on_axis_motion(*axis, *value, event)?
            }
            InputEvent::HatMotion { hat, value } => self.on_hat(*hat, *value, event)?,
            InputEvent::Quit => return Ok(Flow::Quit),
            InputEvent::Other(kind) => {
                print_debug!("unrecognized event: {kind}");
                None
            }
        };
        if let Some(line) = line {
            self.sink.emit(&line)?;
        }
        Ok(Flow::Continue)
    }

    fn on_button(
        &mut self,
        index: ButtonIndex,
        event: &InputEvent,
        on_press: bool,
    ) -> Result<Option<String>, DispatchError> {
        for button in self.config.buttons_mut() {
            if button.index() != index || !button.prints_on(on_press) {
                continue;
            }
            button.set_value(on_press);
            button.handle_event(event)?;
            if let Some(line) = button.format(on_press) {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn on_axis_motion(
        &mut self,
        axis: AxisIndex,
        value: f64,
        event: &InputEvent,
    ) -> Result<Option<String>, DispatchError> {
        for stick in self.config.sticks_mut() {
            if stick.readout().is_disabled() {
                continue;
            }
            match stick.set_value(axis, value) {
                Ok(()) => {}
                // Axis belongs to another stick.
                Err(e) if e.is_unrelated_axis() => continue,
                Err(e) => return Err(e.into()),
            }
            stick.handle_event(event)?;
            if let Some(line) = stick.format(axis)? {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    fn on_hat(
        &mut self,
        hat: HatIndex,
        value: HatValue,
        event: &InputEvent,
    ) -> Result<Option<String>, DispatchError> {
        let pad = self
            .config
            .hats_mut()
            .get_mut(usize::from(hat))
            .ok_or(DispatchError::UnknownHat(hat))?;
        pad.set_value(value);
        let on_press = !value.is_centered();
        pad.handle_event(event, on_press)?;
        Ok(pad.format(on_press))
    }
}
