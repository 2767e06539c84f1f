use crate::error::Result;
use crate::events::InputEvent;
use crate::types::DeviceInfo;

/// A drainable supplier of normalized joystick events.
///
/// Sources are created and driven on the polling thread, so they do not need
/// to be `Send`.
pub trait InputSource {
    /// Opens the device and reports what was found.
    fn initialize(&mut self) -> Result<DeviceInfo>;

    /// Returns every event queued since the previous call, in arrival order.
    /// Must not block.
    fn drain_pending_events(&mut self) -> Vec<InputEvent>;

    /// Releases the device handle. Calling it twice is a no-op.
    fn shutdown(&mut self);
}
