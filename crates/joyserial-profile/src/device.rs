use ahash::AHashSet;

use crate::control::{AxisPairControl, ButtonControl, DpadControl};
use crate::ProfileError;

/// The controls of one controller model, keyed by its reported name.
///
/// Hats are positional: the pad at position `n` handles hat `n`.
#[derive(Debug)]
pub struct DeviceConfig {
    name: Box<str>,
    buttons: Vec<ButtonControl>,
    sticks: Vec<AxisPairControl>,
    hats: Vec<DpadControl>,
}

impl DeviceConfig {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            buttons: Vec::new(),
            sticks: Vec::new(),
            hats: Vec::new(),
        }
    }

    pub fn with_button(mut self, button: ButtonControl) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn with_stick(mut self, stick: AxisPairControl) -> Self {
        self.sticks.push(stick);
        self
    }

    /// Appends the pad for the next hat index.
    pub fn with_hat(mut self, hat: DpadControl) -> Self {
        self.hats.push(hat);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buttons(&self) -> &[ButtonControl] {
        &self.buttons
    }

    pub fn buttons_mut(&mut self) -> &mut [ButtonControl] {
        &mut self.buttons
    }

    pub fn sticks(&self) -> &[AxisPairControl] {
        &self.sticks
    }

    pub fn sticks_mut(&mut self) -> &mut [AxisPairControl] {
        &mut self.sticks
    }

    pub fn hats(&self) -> &[DpadControl] {
        &self.hats
    }

    pub fn hats_mut(&mut self) -> &mut [DpadControl] {
        &mut self.hats
    }

    /// Checks that button indices are unique and that every stick owns two
    /// distinct axes no other stick uses.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let mut buttons = AHashSet::new();
        for button in &self.buttons {
            if !buttons.insert(button.index()) {
                return Err(ProfileError::DuplicateButton {
                    device: self.name.to_string(),
                    index: button.index(),
                });
            }
        }

        let mut axes = AHashSet::new();
        for stick in &self.sticks {
            if stick.horizontal_axis() == stick.vertical_axis() {
                return Err(ProfileError::SameAxis {
                    device: self.name.to_string(),
                    control: stick.name().to_string(),
                    axis: stick.horizontal_axis(),
                });
            }
            for axis in [stick.horizontal_axis(), stick.vertical_axis()] {
                if !axes.insert(axis) {
                    return Err(ProfileError::DuplicateAxis {
                        device: self.name.to_string(),
                        axis,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        let config = DeviceConfig::new("pad")
            .with_button(ButtonControl::new(0, "A"))
            .with_button(ButtonControl::new(1, "B"))
            .with_stick(AxisPairControl::new("L", 0, 1))
            .with_stick(AxisPairControl::new("R", 2, 3))
            .with_hat(DpadControl::new("DPAD"));
        assert!(config.validate().is_ok());
        assert_eq!(config.buttons().len(), 2);
        assert_eq!(config.hats()[0].name(), "DPAD");
    }

    #[test]
    fn duplicate_button_index_is_rejected() {
        let config = DeviceConfig::new("pad")
            .with_button(ButtonControl::new(4, "A"))
            .with_button(ButtonControl::new(4, "B"));
        assert!(matches!(
            config.validate(),
            Err(ProfileError::DuplicateButton { index: 4, .. })
        ));
    }

    #[test]
    fn stick_axes_must_differ() {
        let config = DeviceConfig::new("pad").with_stick(AxisPairControl::new("L", 1, 1));
        assert!(matches!(
            config.validate(),
            Err(ProfileError::SameAxis { axis: 1, .. })
        ));
    }

    #[test]
    fn axis_cannot_belong_to_two_sticks() {
        let config = DeviceConfig::new("pad")
            .with_stick(AxisPairControl::new("L", 0, 1))
            .with_stick(AxisPairControl::new("R", 1, 2));
        assert!(matches!(
            config.validate(),
            Err(ProfileError::DuplicateAxis { axis: 1, .. })
        ));
    }
}
