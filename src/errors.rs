// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io};

#[derive(Debug)]
pub enum SeqMutError {
    Io(io::Error),
    Format(String),
}

// These allow conversion to SeqMutError, required for main() to return Result<()> and for '?' to
// work.

impl From<io::Error> for SeqMutError {
    fn from(e: io::Error) -> Self {
        SeqMutError::Io(e)
    }
}

impl From<String> for SeqMutError {
    fn from(s: String) -> Self {
        SeqMutError::Format(s)
    }
}

impl fmt::Display for SeqMutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqMutError::Io(e) => write!(f, "I/O error: {}", e),
            SeqMutError::Format(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl error::Error for SeqMutError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SeqMutError::Io(e) => Some(e),
            SeqMutError::Format(_) => None,
        }
    }
}
