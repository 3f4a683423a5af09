#![warn(missing_docs)]
//! Thinlens specific error structures
use std::{error::Error, fmt::Display};

/// Thinlens specific Result type
pub type LensResult<T> = std::result::Result<T, ThinLensError>;

/// Errors that can be returned by the thinlens functions.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ThinLensError {
    /// the object sits exactly in the focal point. The image is formed at infinity and has no finite
    /// distance or height.
    DegenerateInput(String),
    /// a lens parameter is not usable (non-finite, zero object distance, outside of a declared range)
    Parameter(String),
    /// errors while exporting a ray diagram
    Render(String),
    /// errors console io
    Console(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl ThinLensError {
    /// Return the name of the error category (the enum variant).
    ///
    /// This is used e.g. by the HTTP backend for reporting the kind of error.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::DegenerateInput(_) => "DegenerateInput",
            Self::Parameter(_) => "Parameter",
            Self::Render(_) => "Render",
            Self::Console(_) => "Console",
            Self::Other(_) => "Other",
        }
    }
    /// Return the bare message without the category prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::DegenerateInput(m)
            | Self::Parameter(m)
            | Self::Render(m)
            | Self::Console(m)
            | Self::Other(m) => m,
        }
    }
}

impl Display for ThinLensError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DegenerateInput(m) => {
                write!(f, "DegenerateInput:{m}")
            }
            Self::Parameter(m) => {
                write!(f, "Parameter:{m}")
            }
            Self::Render(m) => {
                write!(f, "Render:{m}")
            }
            Self::Console(m) => {
                write!(f, "Console:{m}")
            }
            Self::Other(m) => write!(f, "Thinlens Error:Other:{m}"),
        }
    }
}
impl Error for ThinLensError {}

impl std::convert::From<String> for ThinLensError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
