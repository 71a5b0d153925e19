//! Errors raised while producing lesson output.

use core::fmt;

/// Failure to produce or deliver lesson output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("formatting lesson output failed")]
    Format(#[from] fmt::Error),

    #[cfg(feature = "std")]
    #[error("writing lesson output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
