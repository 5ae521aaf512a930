//! Error types for darwcss operations.

use thiserror::Error;

use crate::value::ColorKind;

/// Errors that can occur while building or rendering a stylesheet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid color kind: {0:?} (expected rgb, hls or hex)")]
    InvalidColorKind(String),

    #[error("Selector {0:?} can not be found in scope")]
    SelectorNotFoundInScope(String),

    #[error("Conversion from {} colors is not supported", .0.as_str())]
    UnsupportedConversion(ColorKind),

    #[error("Unknown selector key: {0}")]
    UnknownSelectorKey(String),

    #[cfg(feature = "serde")]
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
