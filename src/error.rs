use thiserror::Error;

/// Errors raised while building, initializing or evaluating a network.
///
/// Every variant is reported at the boundary of the call that caused it;
/// the network or layer involved is left exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NetError {
    /// A size given to allocation or topology construction was zero.
    #[error("invalid dimension for {what}: {value}")]
    InvalidDimension { what: &'static str, value: usize },

    /// The node counts do not describe a usable layer chain.
    #[error("invalid topology: {reason}")]
    InvalidTopology { reason: String },

    /// A vector length does not match the expected input/output length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// `forward` was called before the network was initialized.
    #[error("network has not been initialized")]
    NotInitialized,

    /// Reading or parsing a configuration file failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for NetError {
    fn from(e: std::io::Error) -> Self {
        NetError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for NetError {
    fn from(e: serde_json::Error) -> Self {
        NetError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NetError>;

/// Fails with `DimensionMismatch` unless `got == expected`.
pub(crate) fn ensure_len(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(NetError::DimensionMismatch { expected, got })
    }
}
