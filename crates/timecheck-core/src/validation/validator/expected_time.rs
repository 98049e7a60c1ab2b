use super::Validator;
use crate::datetime::{ParseTimeError, Time};
use std::{error, fmt};

/// An error resulting from validating a time against an expected value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValidationError {
    /// The input is not a valid `HH:MM:SS` encoding.
    Format(ParseTimeError),
    /// The input is well-formed but encodes a different time.
    Mismatch {
        /// The expected time.
        expected: Time,
        /// The time decoded from the input.
        actual: Time,
    },
}

impl TimeValidationError {
    /// Returns `true` if the input could not be parsed.
    #[inline]
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    /// Returns `true` if the input was parsed but did not match.
    #[inline]
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }
}

impl fmt::Display for TimeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Format(err) => write!(f, "invalid time format: {err}"),
            Self::Mismatch { expected, actual } => {
                write!(f, "time `{actual}` does not match the expected `{expected}`")
            }
        }
    }
}

impl error::Error for TimeValidationError {}

impl From<ParseTimeError> for TimeValidationError {
    #[inline]
    fn from(err: ParseTimeError) -> Self {
        Self::Format(err)
    }
}

/// A validator which checks that a string encodes an expected [`Time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedTimeValidator {
    /// The expected time.
    expected: Time,
}

impl ExpectedTimeValidator {
    /// Creates a new instance.
    #[inline]
    pub fn new(expected: Time) -> Self {
        Self { expected }
    }

    /// Returns the expected time.
    #[inline]
    pub fn expected(&self) -> Time {
        self.expected
    }
}

impl Validator<str> for ExpectedTimeValidator {
    type Error = TimeValidationError;

    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        let expected = self.expected;
        let actual = data.parse::<Time>()?;
        if actual == expected {
            Ok(())
        } else {
            Err(TimeValidationError::Mismatch { expected, actual })
        }
    }
}
