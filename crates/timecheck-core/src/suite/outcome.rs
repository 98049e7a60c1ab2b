use crate::{error::Error, validation::TimeValidationError};
use std::{fmt, str::FromStr};

/// The declared or observed outcome of validating a case.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The raw text encodes the expected time.
    #[default]
    Pass,
    /// The raw text is not a valid `HH:MM:SS` encoding.
    FormatError,
    /// The raw text encodes another time.
    Mismatch,
}

impl Outcome {
    /// Returns the outcome of a validation result.
    #[inline]
    pub fn of(result: &Result<(), TimeValidationError>) -> Self {
        match result {
            Ok(()) => Outcome::Pass,
            Err(TimeValidationError::Format(_)) => Outcome::FormatError,
            Err(TimeValidationError::Mismatch { .. }) => Outcome::Mismatch,
        }
    }

    /// Returns `self` as `&'static str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::FormatError => "format-error",
            Outcome::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for Outcome {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(Outcome::Pass),
            "format-error" => Ok(Outcome::FormatError),
            "mismatch" => Ok(Outcome::Mismatch),
            _ => Err(Error::new(format!("unsupported outcome `{s}`"))),
        }
    }
}
