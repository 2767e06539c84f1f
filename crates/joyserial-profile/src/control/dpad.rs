use joyserial_input::{HatValue, InputEvent};

use super::{ControlError, Handler};

/// One of the four directions a pad can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Lookup order used when matching a hat reading.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    fn slot(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    fn default_value(self) -> HatValue {
        match self {
            Direction::Up => HatValue::UP,
            Direction::Down => HatValue::DOWN,
            Direction::Left => HatValue::LEFT,
            Direction::Right => HatValue::RIGHT,
        }
    }

    fn default_text(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

#[derive(Debug, Clone)]
struct DirectionSlot {
    value: HatValue,
    text: Box<str>,
}

/// A directional pad bound to one hat.
///
/// On press the output is `prefix + press_text + direction_text`. On release
/// it is `prefix + release_text` without any direction.
#[derive(Debug)]
pub struct DpadControl {
    name: Box<str>,
    value: Option<HatValue>,
    prefix: Box<str>,
    press_text: Option<Box<str>>,
    release_text: Option<Box<str>>,
    directions: [DirectionSlot; 4],
    on_press: Option<Handler>,
    on_release: Option<Handler>,
}

impl DpadControl {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            value: None,
            prefix: "".into(),
            press_text: Some("".into()),
            release_text: None,
            directions: Direction::ALL.map(|d| DirectionSlot {
                value: d.default_value(),
                text: d.default_text().into(),
            }),
            on_press: None,
            on_release: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Text placed between the prefix and the direction; empty by default.
    pub fn with_press_text(mut self, text: &str) -> Self {
        self.press_text = Some(text.into());
        self
    }

    /// Removes the press text, silencing every press.
    pub fn without_press_text(mut self) -> Self {
        self.press_text = None;
        self
    }

    pub fn with_release_text(mut self, text: &str) -> Self {
        self.release_text = Some(text.into());
        self
    }

    pub fn with_direction_text(mut self, direction: Direction, text: &str) -> Self {
        self.directions[direction.slot()].text = text.into();
        self
    }

    /// Overrides the hat reading recognized as `direction`.
    pub fn with_direction_value(mut self, direction: Direction, value: HatValue) -> Self {
        self.directions[direction.slot()].value = value;
        self
    }

    pub fn with_on_press(mut self, handler: Handler) -> Self {
        self.on_press = Some(handler);
        self
    }

    pub fn with_on_release(mut self, handler: Handler) -> Self {
        self.on_release = Some(handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> Option<HatValue> {
        self.value
    }

    pub fn set_value(&mut self, value: HatValue) {
        self.value = Some(value);
    }

    /// Stores a hat reading and runs the press or release handler.
    pub fn handle_event(&mut self, event: &InputEvent, on_press: bool) -> Result<(), ControlError> {
        let InputEvent::HatMotion { value, .. } = event else {
            return Ok(());
        };
        self.set_value(*value);
        let handler = if on_press {
            self.on_press.as_mut()
        } else {
            self.on_release.as_mut()
        };
        match handler {
            Some(handler) => handler.call(&self.name, event),
            None => Ok(()),
        }
    }

    pub fn format(&self, on_press: bool) -> Option<String> {
        if !on_press {
            // Release output never carries the direction.
            let text = self.release_text.as_deref()?;
            return Some(format!("{}{text}", self.prefix));
        }
        let press = self.press_text.as_deref()?;
        let value = self.value?;
        let slot = self.directions.iter().find(|slot| slot.value == value)?;
        Some(format!("{}{press}{}", self.prefix, slot.text))
    }
}
