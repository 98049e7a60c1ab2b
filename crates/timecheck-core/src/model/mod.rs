//! Data models and the model validation contract.
use crate::{JsonValue, Map, error::Error, validation::Validation};
use serde::{Serialize, de::DeserializeOwned};

mod validation_case;

pub use validation_case::ValidationCase;

/// A type for data model.
pub trait Model: Default + Serialize + DeserializeOwned {
    /// Updates the model using the json object and returns the validation result.
    #[must_use]
    fn read_map(&mut self, data: &Map) -> Validation;

    /// Checks that the fields of the model are mutually consistent.
    fn validate_model(&self) -> Result<(), Error>;

    /// Attempts to construct a model from a json object.
    #[inline]
    fn try_from_map(data: Map) -> Result<Self, Error> {
        serde_json::from_value(JsonValue::from(data)).map_err(Error::from)
    }

    /// Consumes the model and returns as a json object.
    fn into_map(self) -> Result<Map, Error> {
        match serde_json::to_value(self)? {
            JsonValue::Object(map) => Ok(map),
            _ => Err(Error::new("the model can not be converted to a json object")),
        }
    }
}
