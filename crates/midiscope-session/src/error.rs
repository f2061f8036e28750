//! Error types for session state and the mapping codec.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(#[from] midiscope_decode::Error),

    #[error("Invalid mapping file: {0}")]
    InvalidPayload(String),

    #[error("Mapping label must not be empty")]
    EmptyLabel,

    #[error("Message {0} has no mapping key")]
    Unmappable(String),

    #[error("No logged message at index {0}")]
    MessageNotFound(usize),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No connected output targets")]
    NoOutputTargets,

    #[error("Output '{name}' failed: {reason}")]
    Output { name: String, reason: String },

    #[error("Input channel closed")]
    ChannelClosed,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
