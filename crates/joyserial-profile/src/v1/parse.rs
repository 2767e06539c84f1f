use ahash::AHashSet;

use joyserial_input::HatValue;

use crate::control::{
    AxisField, AxisPairControl, AxisReadout, ButtonControl, Direction, DpadControl,
};
use crate::device::DeviceConfig;
use crate::ProfileError;

use super::profile::{
    ProfileV1, ProfileV1Button, ProfileV1Device, ProfileV1Hat, ProfileV1Stick,
};

impl ProfileV1 {
    /// Converts the raw profile into validated device configurations.
    pub fn into_devices(self) -> Result<Vec<DeviceConfig>, ProfileError> {
        let mut names = AHashSet::new();
        let mut devices = Vec::with_capacity(self.devices.len());
        for raw in self.devices {
            if !names.insert(raw.name.clone()) {
                return Err(ProfileError::DuplicateDevice(raw.name));
            }
            let device = parse_device(raw)?;
            device.validate()?;
            devices.push(device);
        }
        Ok(devices)
    }
}

fn parse_device(raw: ProfileV1Device) -> Result<DeviceConfig, ProfileError> {
    let mut device = DeviceConfig::new(&raw.name);
    for button in &raw.buttons {
        device = device.with_button(parse_button(button));
    }
    for stick in &raw.sticks {
        device = device.with_stick(parse_stick(stick)?);
    }
    for hat in &raw.hats {
        device = device.with_hat(parse_hat(hat));
    }
    Ok(device)
}

fn parse_button(raw: &ProfileV1Button) -> ButtonControl {
    let mut button = ButtonControl::new(raw.index, &raw.name).with_prefix(&raw.prefix);
    if let Some(text) = raw.press_text.as_deref() {
        button = button.with_press_text(text);
    }
    if let Some(text) = raw.release_text.as_deref() {
        button = button.with_release_text(text);
    }
    button
}

fn parse_stick(raw: &ProfileV1Stick) -> Result<AxisPairControl, ProfileError> {
    let mut stick = AxisPairControl::new(&raw.name, raw.horizontal_axis, raw.vertical_axis)
        .with_prefix(&raw.prefix);
    if let Some(prefix) = raw.horizontal_prefix.as_deref() {
        stick = stick.with_horizontal_prefix(prefix);
    }
    if let Some(prefix) = raw.vertical_prefix.as_deref() {
        stick = stick.with_vertical_prefix(prefix);
    }
    if let Some(readout) = raw.readout.as_deref() {
        stick = stick.with_readout(parse_readout(readout)?);
    }
    Ok(stick)
}

/// Parse a readout name into an `AxisReadout`.
fn parse_readout(name: &str) -> Result<AxisReadout, ProfileError> {
    Ok(match name {
        "raw" | "value" => AxisReadout::Raw,
        "none" | "disabled" => AxisReadout::Disabled,
        "horizontal" | "h" => AxisReadout::Field(AxisField::Horizontal),
        "vertical" | "v" => AxisReadout::Field(AxisField::Vertical),
        "magnitude" => AxisReadout::Field(AxisField::Magnitude),
        other => return Err(ProfileError::InvalidReadout(other.to_string())),
    })
}

fn parse_hat(raw: &ProfileV1Hat) -> DpadControl {
    let mut pad = DpadControl::new(&raw.name).with_prefix(&raw.prefix);
    if let Some(text) = raw.press_text.as_deref() {
        pad = pad.with_press_text(text);
    }
    if let Some(text) = raw.release_text.as_deref() {
        pad = pad.with_release_text(text);
    }
    let overrides = [
        (Direction::Up, &raw.up_text, raw.up),
        (Direction::Down, &raw.down_text, raw.down),
        (Direction::Left, &raw.left_text, raw.left),
        (Direction::Right, &raw.right_text, raw.right),
    ];
    for (direction, text, value) in overrides {
        if let Some(text) = text.as_deref() {
            pad = pad.with_direction_text(direction, text);
        }
        if let Some(value) = value {
            pad = pad.with_direction_value(direction, HatValue::from(value));
        }
    }
    pad
}
