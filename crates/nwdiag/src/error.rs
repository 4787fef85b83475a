//! Error types for nwdiag operations.
//!
//! Converting an element into a block never fails; [`NwdiagError`] covers the
//! operations around it: loading configuration, resolving theme colors,
//! looking up networks and the strict shape setter.

use std::io;

use thiserror::Error;

use crate::network::NetworkId;

/// The main error type for nwdiag operations.
#[derive(Debug, Error)]
pub enum NwdiagError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid {role} color: {message}")]
    InvalidColor { role: String, message: String },

    #[error("Unknown shape `{0}`")]
    UnknownShape(String),

    #[error("Unknown network `{0}`")]
    UnknownNetwork(NetworkId),

    #[error("Network `{0}` is already defined")]
    DuplicateNetwork(NetworkId),
}
