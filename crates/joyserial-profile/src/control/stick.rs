use joyserial_input::{AxisIndex, InputEvent};

use super::{ControlError, Handler};

/// Both axis values of a stick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisState {
    pub horizontal: f64,
    pub vertical: f64,
}

impl AxisState {
    pub fn magnitude(self) -> f64 {
        self.horizontal.hypot(self.vertical)
    }
}

/// A quantity derived from the stick state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisField {
    Horizontal,
    Vertical,
    Magnitude,
}

impl AxisField {
    fn read(self, state: AxisState) -> f64 {
        match self {
            AxisField::Horizontal => state.horizontal,
            AxisField::Vertical => state.vertical,
            AxisField::Magnitude => state.magnitude(),
        }
    }
}

/// Selects the value printed when an axis moves.
#[derive(Debug, Clone, Copy)]
pub enum AxisReadout {
    /// The stick is skipped by the dispatcher.
    Disabled,
    /// The value of the axis that moved.
    Raw,
    /// The same derived field regardless of which axis moved.
    Field(AxisField),
    /// A strategy supplied with the configuration.
    Custom(fn(AxisState) -> f64),
}

impl AxisReadout {
    pub fn is_disabled(&self) -> bool {
        matches!(self, AxisReadout::Disabled)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Horizontal,
    Vertical,
}

/// An analog stick made of a horizontal and a vertical axis.
#[derive(Debug)]
pub struct AxisPairControl {
    name: Box<str>,
    prefix: Box<str>,
    horizontal_axis: AxisIndex,
    vertical_axis: AxisIndex,
    horizontal_prefix: Box<str>,
    vertical_prefix: Box<str>,
    state: AxisState,
    readout: AxisReadout,
    on_motion: Option<Handler>,
}

impl AxisPairControl {
    pub fn new(name: &str, horizontal_axis: AxisIndex, vertical_axis: AxisIndex) -> Self {
        Self {
            name: name.into(),
            prefix: "".into(),
            horizontal_axis,
            vertical_axis,
            horizontal_prefix: "h,".into(),
            vertical_prefix: "v,".into(),
            state: AxisState::default(),
            readout: AxisReadout::Raw,
            on_motion: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_horizontal_prefix(mut self, prefix: &str) -> Self {
        self.horizontal_prefix = prefix.into();
        self
    }

    pub fn with_vertical_prefix(mut self, prefix: &str) -> Self {
        self.vertical_prefix = prefix.into();
        self
    }

    pub fn with_readout(mut self, readout: AxisReadout) -> Self {
        self.readout = readout;
        self
    }

    pub fn with_on_motion(mut self, handler: Handler) -> Self {
        self.on_motion = Some(handler);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn horizontal_axis(&self) -> AxisIndex {
        self.horizontal_axis
    }

    pub fn vertical_axis(&self) -> AxisIndex {
        self.vertical_axis
    }

    pub fn state(&self) -> AxisState {
        self.state
    }

    pub fn readout(&self) -> AxisReadout {
        self.readout
    }

    fn side(&self, axis: AxisIndex) -> Result<Side, ControlError> {
        if axis == self.horizontal_axis {
            Ok(Side::Horizontal)
        } else if axis == self.vertical_axis {
            Ok(Side::Vertical)
        } else {
            Err(ControlError::UnrelatedAxis {
                control: self.name.clone(),
                axis,
            })
        }
    }

    /// Stores `value` for `axis`. Fails without touching the state when the
    /// axis belongs to another stick.
    pub fn set_value(&mut self, axis: AxisIndex, value: f64) -> Result<(), ControlError> {
        match self.side(axis)? {
            Side::Horizontal => self.state.horizontal = value,
            Side::Vertical => self.state.vertical = value,
        }
        Ok(())
    }

    /// Stores the motion and runs the motion handler.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<(), ControlError> {
        let InputEvent::AxisMotion { axis, value } = event else {
            return Ok(());
        };
        self.set_value(*axis, *value)?;
        match self.on_motion.as_mut() {
            Some(handler) => handler.call(&self.name, event),
            None => Ok(()),
        }
    }

    /// Renders `prefix + axis_prefix + value` for `axis`.
    ///
    /// Returns `Ok(None)` when the readout is disabled.
    pub fn format(&self, axis: AxisIndex) -> Result<Option<String>, ControlError> {
        let side = self.side(axis)?;
        let axis_prefix = match side {
            Side::Horizontal => &self.horizontal_prefix,
            Side::Vertical => &self.vertical_prefix,
        };
        let value = match self.readout {
            AxisReadout::Disabled => return Ok(None),
            AxisReadout::Raw => match side {
                Side::Horizontal => self.state.horizontal,
                Side::Vertical => self.state.vertical,
            },
            AxisReadout::Field(field) => field.read(self.state),
            AxisReadout::Custom(strategy) => strategy(self.state),
        };
        Ok(Some(format!("{}{axis_prefix}{}", self.prefix, render(value))))
    }
}

/// Shortest round-trip form with a signed exponent of at least two digits,
/// e.g. `0.5`, `-0.0516`, `3.0518509475997192e-05`.
fn render(value: f64) -> String {
    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
