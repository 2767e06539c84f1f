use sdl2::event::Event;
use sdl2::joystick::{HatState, Joystick};
use sdl2::{EventPump, JoystickSubsystem, Sdl};

use crate::error::{Error, Result};
use crate::events::{HatValue, InputEvent};
use crate::source::InputSource;
use crate::types::DeviceInfo;

/// Version string of the linked SDL library.
pub fn backend_version() -> String {
    format!("SDL {}", sdl2::version::version())
}

// Drop order matters: the joystick closes before its subsystem and the context.
struct Session {
    joystick: Joystick,
    event_pump: EventPump,
    _joysticks: JoystickSubsystem,
    _sdl: Sdl,
}

/// SDL2-backed joystick reader.
///
/// SDL must live entirely within one thread, so construct and initialize it
/// on the thread that will poll it.
pub struct SdlInput {
    index: u32,
    session: Option<Session>,
}

impl SdlInput {
    /// Reader for the joystick at `index` in SDL's enumeration order.
    pub fn new(index: u32) -> Self {
        Self {
            index,
            session: None,
        }
    }
}

impl InputSource for SdlInput {
    fn initialize(&mut self) -> Result<DeviceInfo> {
        if let Some(session) = self.session.as_ref() {
            return Ok(device_info(&session.joystick));
        }

        // SIGINT belongs to the application, not to SDL's quit event.
        sdl2::hint::set("SDL_NO_SIGNAL_HANDLERS", "1");

        let sdl = sdl2::init().map_err(Error::BackendInit)?;
        let joysticks = sdl.joystick().map_err(Error::BackendInit)?;
        let event_pump = sdl.event_pump().map_err(Error::BackendInit)?;

        let count = joysticks.num_joysticks().map_err(Error::Backend)?;
        if self.index >= count {
            return Err(Error::DeviceNotFound(self.index));
        }
        let joystick = joysticks
            .open(self.index)
            .map_err(|e| Error::Backend(e.to_string()))?;
        let info = device_info(&joystick);

        self.session = Some(Session {
            joystick,
            event_pump,
            _joysticks: joysticks,
            _sdl: sdl,
        });
        Ok(info)
    }

    fn drain_pending_events(&mut self) -> Vec<InputEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let instance = session.joystick.instance_id();
        session
            .event_pump
            .poll_iter()
            .filter_map(|event| map_sdl_event(event, instance))
            .collect()
    }

    fn shutdown(&mut self) {
        self.session = None;
    }
}

fn device_info(joystick: &Joystick) -> DeviceInfo {
    DeviceInfo {
        name: joystick.name(),
        axes: joystick.num_axes(),
        buttons: joystick.num_buttons(),
        hats: joystick.num_hats(),
    }
}

/// Maps an SDL event to an [`InputEvent`], dropping joystick events that
/// belong to other devices.
fn map_sdl_event(event: Event, instance: u32) -> Option<InputEvent> {
    Some(match event {
        Event::JoyButtonDown {
            which, button_idx, ..
        } => {
            if which != instance {
                return None;
            }
            InputEvent::ButtonDown { button: button_idx }
        }
        Event::JoyButtonUp {
            which, button_idx, ..
        } => {
            if which != instance {
                return None;
            }
            InputEvent::ButtonUp { button: button_idx }
        }
        Event::JoyAxisMotion {
            which,
            axis_idx,
            value,
            ..
        } => {
            if which != instance {
                return None;
            }
            InputEvent::AxisMotion {
                axis: axis_idx,
                value: normalize_axis(value),
            }
        }
        Event::JoyHatMotion {
            which,
            hat_idx,
            state,
            ..
        } => {
            if which != instance {
                return None;
            }
            InputEvent::HatMotion {
                hat: hat_idx,
                value: map_hat_state(state),
            }
        }
        Event::Quit { .. } => InputEvent::Quit,
        other => InputEvent::Other(format!("{other:?}").into()),
    })
}

fn normalize_axis(value: i16) -> f64 {
    (f64::from(value) / f64::from(i16::MAX)).clamp(-1.0, 1.0)
}

fn map_hat_state(state: HatState) -> HatValue {
    match state {
        HatState::Centered => HatValue::CENTERED,
        HatState::Up => HatValue::UP,
        HatState::Down => HatValue::DOWN,
        HatState::Left => HatValue::LEFT,
        HatState::Right => HatValue::RIGHT,
        HatState::RightUp => HatValue::new(1, 1),
        HatState::RightDown => HatValue::new(1, -1),
        HatState::LeftUp => HatValue::new(-1, 1),
        HatState::LeftDown => HatValue::new(-1, -1),
    }
}
