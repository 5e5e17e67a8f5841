//! Decoder error types and soft warnings

use std::fmt::Display;
use thiserror::Error;

/// Fatal decode errors. Once one of these is returned the sink has received
/// no further output for the offending command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The delimited stream holds fewer than 3 commands; even a minimal
    /// initialize/select/draw program needs 3.
    #[error("no usable plotter commands in input ({found} of at least 3 tokens)")]
    NoUsableInput { found: usize },

    /// A parameter that should be numeric failed to parse.
    #[error("malformed numeric parameter '{value}' in command {index} ('{params}')")]
    MalformedParameter { index: usize, value: String, params: String },

    /// A pen-down coordinate list with an odd number of values cannot be
    /// split into (x, y) pairs.
    #[error("unpaired coordinate list of length {count} in command {index} ('{params}')")]
    UnpairedCoordinate { index: usize, count: usize, params: String },
}

/// Errors raised by the path effects in [`crate::effects`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EffectError {
    #[error("maximum segment length must be positive and finite (got {value})")]
    NonPositiveLength { value: f64 },
}

/// Soft decode warnings. Collected in stream order, one entry per
/// occurrence, and never abort the decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// A two-letter opcode outside the interpreted set (IN, SP, PU, PD).
    UnknownCommand,
}

impl DecodeWarning {
    /// Returns the classification string surfaced to callers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "UNKNOWN_COMMANDS",
        }
    }
}

impl Display for DecodeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
