use super::Validator;
use crate::datetime::{ParseTimeError, Time};
use std::str::FromStr;

/// A validator for the `HH:MM:SS` encoding of [`Time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValidator;

impl Validator<str> for TimeValidator {
    type Error = ParseTimeError;

    #[inline]
    fn validate(&self, data: &str) -> Result<(), Self::Error> {
        Time::from_str(data)?;
        Ok(())
    }
}
