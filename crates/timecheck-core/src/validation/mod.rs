//! Generic validator and the time validation rules.
use crate::{Map, SharedString, datetime::Time, error::Error, extension::JsonObjectExt};
use smallvec::SmallVec;
use std::fmt;

mod validator;

pub use validator::{ExpectedTimeValidator, TimeValidationError, TimeValidator, Validator};

/// Validates that `raw` is an `HH:MM:SS` encoding of the `expected` time.
///
/// A malformed input yields [`TimeValidationError::Format`], and a well-formed
/// input which decodes to another time yields [`TimeValidationError::Mismatch`].
#[inline]
pub fn validate_time(raw: &str, expected: Time) -> Result<(), TimeValidationError> {
    ExpectedTimeValidator::new(expected).validate(raw)
}

/// A record of validation results.
#[derive(Debug, Default)]
pub struct Validation {
    failed_entries: SmallVec<[(SharedString, Error); 4]>,
}

impl Validation {
    /// Creates a new instance.
    #[inline]
    pub fn new() -> Self {
        Self {
            failed_entries: SmallVec::new(),
        }
    }

    /// Creates a new instance with the entry.
    #[inline]
    pub fn from_entry(key: impl Into<SharedString>, err: impl Into<Error>) -> Self {
        let mut entries = SmallVec::new();
        entries.push((key.into(), err.into()));
        Self {
            failed_entries: entries,
        }
    }

    /// Records an entry with the supplied message.
    #[inline]
    pub fn record(&mut self, key: impl Into<SharedString>, message: impl Into<SharedString>) {
        self.failed_entries.push((key.into(), Error::new(message)));
    }

    /// Records an entry for the error.
    #[inline]
    pub fn record_fail(&mut self, key: impl Into<SharedString>, err: impl Into<Error>) {
        self.failed_entries.push((key.into(), err.into()));
    }

    /// Validates the string value with a specific format.
    pub fn validate_format(&mut self, key: impl Into<SharedString>, value: &str, format: &str) {
        match format {
            "time" => {
                if let Err(err) = TimeValidator.validate(value) {
                    self.record_fail(key, err);
                }
            }
            _ => {
                let field = key.into();
                tracing::warn!("unsupported format `{format}` for the field `{field}`");
            }
        }
    }

    /// Validates that the string value encodes the expected time.
    pub fn validate_time(&mut self, key: impl Into<SharedString>, value: &str, expected: Time) {
        if let Err(err) = validate_time(value, expected) {
            self.record_fail(key, err);
        }
    }

    /// Returns true if the validation contains a value for the specified key.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.failed_entries.iter().any(|(field, _)| field == key)
    }

    /// Returns `true` if the validation is success.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed_entries.is_empty()
    }

    /// Returns a list of invalid params.
    #[inline]
    pub fn invalid_params(&self) -> Vec<&str> {
        self.failed_entries
            .iter()
            .map(|entry| entry.0.as_ref())
            .collect()
    }

    /// Consumes the validation and returns an error if any entry has failed.
    pub fn into_result(self) -> Result<(), Error> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::new(self.to_string()))
        }
    }

    /// Consumes the validation and returns as a json object.
    #[must_use]
    pub fn into_map(self) -> Map {
        let mut map = Map::new();
        for (key, err) in self.failed_entries {
            let message = err.to_string();
            tracing::warn!("invalid value for `{key}`: {message}");
            map.upsert(key, message);
        }
        map
    }
}

impl fmt::Display for Validation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let failed_entries = &self.failed_entries;
        let mut errors = Vec::with_capacity(failed_entries.len());
        for (key, err) in failed_entries {
            let message = format!("invalid value for `{key}`: {err}");
            errors.push(message);
        }
        write!(f, "{}", errors.join(","))
    }
}
