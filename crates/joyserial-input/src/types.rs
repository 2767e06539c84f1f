use std::fmt;

/// Hardware index of a joystick button.
pub type ButtonIndex = u8;
/// Hardware index of an analog axis.
pub type AxisIndex = u8;
/// Hardware index of a hat (directional pad).
pub type HatIndex = u8;

/// Device meta information reported once the input source is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub axes: u32,
    pub buttons: u32,
    pub hats: u32,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:      {}", self.name)?;
        writeln!(f, "# Axes:    {}", self.axes)?;
        writeln!(f, "# Buttons: {}", self.buttons)?;
        write!(f, "# Hats:    {}", self.hats)
    }
}
