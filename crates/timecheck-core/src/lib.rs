#![doc = include_str!("../README.md")]

pub mod application;
pub mod datetime;
pub mod error;
pub mod extension;
pub mod model;
pub mod state;
pub mod suite;
pub mod validation;

#[doc(no_inline)]
pub use serde_json::json;

/// A JSON value.
pub type JsonValue = serde_json::Value;

/// A JSON key-value type.
pub type Map = serde_json::Map<String, JsonValue>;

/// An allocation-optimized string.
pub type SharedString = std::borrow::Cow<'static, str>;
