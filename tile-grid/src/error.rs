//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use thiserror::Error;

/// Errors raised while validating options and arguments
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid option combination or zoom level
    #[error("{0}")]
    Config(String),
    /// Argument does not have the shape expected by the input mode
    #[error("invalid argument '{arg}' (expected {expected})")]
    Parse { arg: String, expected: &'static str },
    /// Coordinate outside of WGS84 bounds or tile number outside of the zoom level
    #[error("{0}")]
    Range(String),
}

/// Error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Parse,
    Range,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::Range(_) => ErrorKind::Range,
        }
    }

    pub(crate) fn parse(arg: &str, expected: &'static str) -> Error {
        Error::Parse {
            arg: arg.to_string(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
