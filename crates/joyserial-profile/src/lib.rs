mod builtin;
mod control;
mod device;
mod parse;
mod registry;
mod v1;

use thiserror::Error;

use joyserial_input::{AxisIndex, ButtonIndex};

pub use builtin::{my_power_2in1, DEFAULT_DEVICE_NAME};
pub use control::{
    AxisField, AxisPairControl, AxisReadout, AxisState, ButtonControl, ControlError,
    ControlHandler, Direction, DpadControl, Handler, HandlerError, HandlerResult,
};
pub use device::DeviceConfig;
pub use parse::parse_profile;
pub use registry::Registry;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),
    #[error("path error: {0}")]
    Io(#[from] std::io::Error),
    #[error("\"{0}\" is not a supported controller")]
    DeviceNotSupported(String),
    #[error("device \"{0}\" is configured twice")]
    DuplicateDevice(String),
    #[error("{device}: button index {index} is used twice")]
    DuplicateButton { device: String, index: ButtonIndex },
    #[error("{device}: axis {axis} is used by two sticks")]
    DuplicateAxis { device: String, axis: AxisIndex },
    #[error("{device}: stick {control} uses axis {axis} twice")]
    SameAxis {
        device: String,
        control: String,
        axis: AxisIndex,
    },
    #[error("invalid readout: {0}")]
    InvalidReadout(String),
}
