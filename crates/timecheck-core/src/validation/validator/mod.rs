//! Common validation rules.

mod expected_time;
mod time;

pub use expected_time::{ExpectedTimeValidator, TimeValidationError};
pub use time::TimeValidator;

/// A generic validator.
pub trait Validator<T: ?Sized> {
    /// The error type.
    type Error: Into<crate::error::Error>;

    /// Validates the data.
    fn validate(&self, data: &T) -> Result<(), Self::Error>;
}
