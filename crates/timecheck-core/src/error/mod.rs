//! Type-erased errors with a chain of sources.
use crate::SharedString;
use std::{error, fmt, iter};

/// An error type backed by an allocation-optimized string.
#[derive(Debug)]
pub struct Error {
    /// Error message.
    message: SharedString,
    /// Error source.
    source: Option<Box<Error>>,
}

impl Error {
    /// Creates a new instance with the supplied message.
    #[inline]
    pub fn new(message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new instance with the supplied message and the error source.
    #[inline]
    pub fn with_source(message: impl Into<SharedString>, source: impl Into<Error>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source.into())),
        }
    }

    /// Returns a new instance with the supplied message and `self` as the error source.
    #[inline]
    pub fn wrap(self, message: impl Into<SharedString>) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(self)),
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the source.
    #[inline]
    pub fn source(&self) -> Option<&Error> {
        self.source.as_deref()
    }

    /// Returns an iterator over `self` and its sources, starting with `self`.
    #[inline]
    pub fn sources(&self) -> impl Iterator<Item = &Error> {
        iter::successors(Some(self), |err| err.source())
    }

    /// Returns the innermost source of the error.
    pub fn root_source(&self) -> &Error {
        self.sources().last().unwrap_or(self)
    }
}

impl<E: error::Error + 'static> From<E> for Error {
    #[inline]
    fn from(err: E) -> Self {
        Self {
            message: err.to_string().into(),
            source: err.source().map(|err| Box::new(Self::new(err.to_string()))),
        }
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = &self.message;
        if let Some(source) = &self.source {
            write!(f, "{message}: {source}")
        } else {
            write!(f, "{message}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn it_chains_sources() {
        let err = Error::new("hour out of range").wrap("invalid value for `raw`");
        assert_eq!(err.message(), "invalid value for `raw`");
        assert_eq!(err.to_string(), "invalid value for `raw`: hour out of range");
        assert_eq!(err.sources().count(), 2);
        assert_eq!(err.root_source().message(), "hour out of range");
    }

    #[test]
    fn it_converts_std_errors() {
        let err = Error::from("x".parse::<u8>().unwrap_err());
        assert_eq!(err.message(), "invalid digit found in string");
        assert!(err.source().is_none());
    }
}
