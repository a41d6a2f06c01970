//! Error handling for SegKit
//!
//! The geometry kernel itself is infallible; errors only arise at the edges:
//! - Display surface failures (drawing backends, frame export)
//! - Channel and worker-thread failures in the runtime
//! - File I/O
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for SegKit
///
/// A unified error type used by the library crates' public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// The display surface reported a failure
    #[error("Surface error: {message}")]
    Surface {
        /// A message describing the failure.
        message: String,
    },

    /// Encoding or decoding a frame image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// The command channel between the input worker and the renderer closed
    #[error("Command channel closed")]
    ChannelClosed,

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a surface error from a string message
    pub fn surface(msg: impl Into<String>) -> Self {
        Error::Surface {
            message: msg.into(),
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
