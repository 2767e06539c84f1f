pub mod app;
pub mod logging;
pub mod probe;
pub mod sink;

mod error;

pub use error::{AppError, DispatchError};
