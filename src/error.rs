use std::io;
use thiserror::Error;

/// Custom error type for the sysdeck application
#[derive(Error, Debug)]
pub enum SysdeckError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Sampler error: {0}")]
    Sampler(String),

    #[error("Variant switch failed: {0}")]
    Switch(String),

    #[error("Dispatch failed: {0}")]
    Dispatch(String),

    #[error("Probe failed: {0}")]
    Probe(String),

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the sysdeck application
pub type Result<T> = std::result::Result<T, SysdeckError>;

impl SysdeckError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SysdeckError::Config(msg.into())
    }

    /// Create an invalid path error
    pub fn invalid_path<S: Into<String>>(msg: S) -> Self {
        SysdeckError::InvalidPath(msg.into())
    }

    pub fn sampler<S: Into<String>>(msg: S) -> Self {
        SysdeckError::Sampler(msg.into())
    }

    /// Create a variant switch error
    pub fn switch<S: Into<String>>(msg: S) -> Self {
        SysdeckError::Switch(msg.into())
    }

    /// Create a dispatch error
    pub fn dispatch<S: Into<String>>(msg: S) -> Self {
        SysdeckError::Dispatch(msg.into())
    }

    pub fn probe<S: Into<String>>(msg: S) -> Self {
        SysdeckError::Probe(msg.into())
    }

    pub fn worker<S: Into<String>>(msg: S) -> Self {
        SysdeckError::Worker(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SysdeckError::Other(msg.into())
    }
}
