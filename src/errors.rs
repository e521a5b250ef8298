/// # Check-In Errors
/// This module defines the `CheckInError` enum, which encapsulates all potential errors that can occur within the dock check-in service.
/// Lookups of unknown check-in ids are not errors: the orchestrator treats them as silent no-ops.


use thiserror::Error;
use std::io;
use tokio::sync::mpsc::error::SendError;
use tokio::sync::oneshot::error::RecvError;
use crate::models::DockStatus;

#[derive(Error, Debug)]
pub enum CheckInError {
    /// Represents errors arising from misconfigurations or invalid settings.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during serialization or deserialization of data.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Represents errors during the initialization of the logging system.
    #[error("Logging initialization error: {0}")]
    LoggingError(String),

    /// Bad credentials at login.
    #[error("Invalid username or password")]
    AuthenticationFailed,

    /// An operation that needs an operator was attempted without a session.
    #[error("Not logged in")]
    NotAuthenticated,

    /// The check-in form is missing a required field.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The target dock cannot take a driver in its current status.
    #[error("{dock} is not available (currently {status})")]
    DockUnavailable { dock: String, status: DockStatus },

    /// Maintenance cannot be toggled while a driver occupies the dock.
    #[error("{0} is occupied")]
    DockOccupied(String),

    /// Represents an error when a requested dock is not found.
    #[error("Dock not found: {0}")]
    UnknownDock(String),

    /// Represents errors when sending data over a channel.
    #[error("Channel send error: {0}")]
    ChannelSendError(String),

    /// Represents errors when receiving data from a channel.
    #[error("Channel receive error: {0}")]
    ChannelRecvError(String),

    /// A console line that does not parse into a command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl<T> From<SendError<T>> for CheckInError {
    fn from(err: SendError<T>) -> Self {
        CheckInError::ChannelSendError(err.to_string())
    }
}

impl From<RecvError> for CheckInError {
    fn from(err: RecvError) -> Self {
        CheckInError::ChannelRecvError(err.to_string())
    }
}


impl From<config::ConfigError> for CheckInError {
    fn from(err: config::ConfigError) -> Self {
        CheckInError::ConfigError(err.to_string())
    }
}

pub type CheckInResult<T> = Result<T, CheckInError>;
