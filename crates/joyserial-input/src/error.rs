use thiserror::Error;

/// Error type for input backend operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to initialize the backend (SDL2 or subsystems).
    #[error("backend init failed: {0}")]
    BackendInit(String),
    /// No joystick is attached at the requested index.
    #[error("joystick not found at index {0}")]
    DeviceNotFound(u32),
    /// Events were requested before `initialize` succeeded.
    #[error("input source is not initialized")]
    NotInitialized,
    /// A generic backend error.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Convenient result alias for input operations.
pub type Result<T> = std::result::Result<T, Error>;
