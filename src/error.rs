//! Centralized error type for the midiscope umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Decode: {0}")]
    Decode(#[from] midiscope_decode::Error),

    #[error("Session: {0}")]
    Session(#[from] midiscope_session::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
