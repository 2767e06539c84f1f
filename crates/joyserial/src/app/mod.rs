mod dispatcher;
mod poller;
mod stop;

pub use dispatcher::{Dispatcher, Flow};
pub use poller::{poll_interval, Poller, PollerHandle, DEFAULT_POLL_HZ};
pub use stop::StopFlag;
