use crate::types::{AxisIndex, ButtonIndex, HatIndex};

/// Discrete reading of a hat switch.
///
/// `x` grows to the right and `y` grows upwards, so pushing the pad up
/// reads as `(0, 1)`. Diagonals are reported as both components set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HatValue {
    pub x: i8,
    pub y: i8,
}

impl HatValue {
    pub const CENTERED: HatValue = HatValue::new(0, 0);
    pub const UP: HatValue = HatValue::new(0, 1);
    pub const DOWN: HatValue = HatValue::new(0, -1);
    pub const LEFT: HatValue = HatValue::new(-1, 0);
    pub const RIGHT: HatValue = HatValue::new(1, 0);

    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Whether the hat is resting in its neutral position.
    pub fn is_centered(self) -> bool {
        self == Self::CENTERED
    }
}

impl From<(i8, i8)> for HatValue {
    fn from((x, y): (i8, i8)) -> Self {
        Self::new(x, y)
    }
}

/// Normalized input events produced by an [`InputSource`](crate::InputSource).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A joystick button was pressed.
    ButtonDown { button: ButtonIndex },
    /// A joystick button was released.
    ButtonUp { button: ButtonIndex },
    /// An analog axis moved; value is normalized to [-1.0, 1.0].
    AxisMotion { axis: AxisIndex, value: f64 },
    /// A hat switch changed position.
    HatMotion { hat: HatIndex, value: HatValue },
    /// The device or the backend asked the application to quit.
    Quit,
    /// Any event without a joystick meaning, described for diagnostics.
    Other(Box<str>),
}

impl InputEvent {
    /// Short name of the event kind, used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            InputEvent::ButtonDown { .. } => "button-down",
            InputEvent::ButtonUp { .. } => "button-up",
            InputEvent::AxisMotion { .. } => "axis-motion",
            InputEvent::HatMotion { .. } => "hat-motion",
            InputEvent::Quit => "quit",
            InputEvent::Other(kind) => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_origin_is_centered() {
        assert!(HatValue::CENTERED.is_centered());
        assert!(HatValue::from((0, 0)).is_centered());
        for value in [HatValue::UP, HatValue::DOWN, HatValue::LEFT, HatValue::RIGHT] {
            assert!(!value.is_centered(), "{value:?} must not be neutral");
        }
        assert!(!HatValue::new(1, 1).is_centered());
    }

    #[test]
    fn kind_of_other_event_is_its_description() {
        assert_eq!(InputEvent::Other("JoyDeviceAdded".into()).kind(), "JoyDeviceAdded");
        assert_eq!(InputEvent::ButtonDown { button: 3 }.kind(), "button-down");
        assert_eq!(InputEvent::Quit.kind(), "quit");
    }
}
