use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

use crate::error::{Error, Result};
use crate::events::InputEvent;
use crate::source::InputSource;
use crate::types::DeviceInfo;

/// Sending end used to feed a [`ChannelInput`].
pub type EventSender = Sender<InputEvent>;

/// An input source fed through a channel instead of real hardware.
///
/// Dropping every [`EventSender`] is reported as a single [`InputEvent::Quit`].
pub struct ChannelInput {
    info: DeviceInfo,
    rx: Receiver<InputEvent>,
    initialized: bool,
    closed: bool,
}

impl ChannelInput {
    /// Creates a source that will report `info` on initialization.
    pub fn new(info: DeviceInfo) -> (EventSender, Self) {
        let (tx, rx) = unbounded();
        let source = Self {
            info,
            rx,
            initialized: false,
            closed: false,
        };
        (tx, source)
    }

    /// Shortcut for a source named `name` with no capability counts.
    pub fn named(name: &str) -> (EventSender, Self) {
        Self::new(DeviceInfo {
            name: name.to_string(),
            axes: 0,
            buttons: 0,
            hats: 0,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl InputSource for ChannelInput {
    fn initialize(&mut self) -> Result<DeviceInfo> {
        if self.closed {
            return Err(Error::Backend("channel already shut down".into()));
        }
        self.initialized = true;
        Ok(self.info.clone())
    }

    fn drain_pending_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !self.initialized || self.closed {
            return events;
        }
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    events.push(InputEvent::Quit);
                    break;
                }
            }
        }
        events
    }

    fn shutdown(&mut self) {
        self.initialized = false;
        self.closed = true;
    }
}
