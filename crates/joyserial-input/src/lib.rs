mod channel;
mod error;
mod events;
mod source;
mod types;

#[cfg(feature = "sdl2-backend")]
mod sdl;

pub use crate::channel::{ChannelInput, EventSender};
pub use crate::error::{Error, Result};
pub use crate::events::{HatValue, InputEvent};
pub use crate::source::InputSource;
pub use crate::types::{AxisIndex, ButtonIndex, DeviceInfo, HatIndex};

#[cfg(feature = "sdl2-backend")]
pub use crate::sdl::{backend_version, SdlInput};
