use super::Model;
use crate::{
    Map,
    datetime::Time,
    error::Error,
    extension::JsonObjectExt,
    validation::{TimeValidationError, Validation, validate_time},
};
use serde::{Deserialize, Serialize};

/// A raw string paired with the time it is expected to encode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCase {
    /// The raw text.
    raw: String,
    /// The expected time.
    expected: Time,
}

impl ValidationCase {
    /// Creates a new instance.
    #[inline]
    pub fn new(raw: impl Into<String>, expected: Time) -> Self {
        Self {
            raw: raw.into(),
            expected,
        }
    }

    /// Returns the raw text.
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the expected time.
    #[inline]
    pub fn expected(&self) -> Time {
        self.expected
    }

    /// Validates the raw text against the expected time,
    /// keeping the format and mismatch failures apart.
    #[inline]
    pub fn check(&self) -> Result<(), TimeValidationError> {
        validate_time(&self.raw, self.expected)
    }
}

impl Model for ValidationCase {
    fn read_map(&mut self, data: &Map) -> Validation {
        let mut validation = Validation::new();
        match data.get_str("raw") {
            Some(raw) => self.raw = raw.to_owned(),
            None => validation.record("raw", "should be a string"),
        }
        if let Some(result) = data.parse_time("expected") {
            match result {
                Ok(expected) => self.expected = expected,
                Err(err) => validation.record_fail("expected", err),
            }
        } else if let Some(fields) = data.get_object("expected") {
            let mut hms = [0; 3];
            let mut complete = true;
            for (value, key) in hms.iter_mut().zip(["hour", "minute", "second"]) {
                match fields.get_u32(key) {
                    Some(field_value) => *value = field_value,
                    None => {
                        let message = "should be an unsigned integer";
                        validation.record(format!("expected.{key}"), message);
                        complete = false;
                    }
                }
            }
            if complete {
                let [hour, minute, second] = hms;
                match Time::try_new(hour, minute, second) {
                    Ok(expected) => self.expected = expected,
                    Err(err) => validation.record_fail("expected", err),
                }
            }
        } else {
            validation.record("expected", "should be a time string or an object");
        }
        validation
    }

    fn validate_model(&self) -> Result<(), Error> {
        self.check().map_err(|err| {
            let raw = &self.raw;
            let expected = self.expected;
            tracing::warn!(raw, %expected, "fail to validate the model: {err}");
            Error::with_source(format!("invalid value for `raw`: `{raw}`"), err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ValidationCase;
    use crate::{Map, datetime::Time, json, model::Model};

    fn object(value: serde_json::Value) -> Map {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn it_validates_model() {
        let case = ValidationCase::new("11:45:23", Time::try_new(11, 45, 23).unwrap());
        assert!(case.validate_model().is_ok());

        let case = ValidationCase::new("14-30-00", Time::try_new(14, 30, 0).unwrap());
        let err = case.validate_model().unwrap_err();
        assert_eq!(err.message(), "invalid value for `raw`: `14-30-00`");
        assert!(err.source().is_some());
        assert!(case.check().unwrap_err().is_format_error());

        let case = ValidationCase::new("25:00:00", Time::midnight());
        assert!(case.validate_model().is_err());

        let case = ValidationCase::new("09:05:00", Time::try_new(9, 5, 1).unwrap());
        assert!(case.validate_model().is_err());
        assert!(case.check().unwrap_err().is_mismatch());
    }

    #[test]
    fn it_reads_map() {
        let mut case = ValidationCase::default();
        let validation = case.read_map(&object(json!({
            "raw": "11:45:23",
            "expected": { "hour": 11, "minute": 45, "second": 23 },
        })));
        assert!(validation.is_success());
        assert_eq!(case.raw(), "11:45:23");
        assert_eq!(case.expected(), Time::try_new(11, 45, 23).unwrap());
        assert!(case.validate_model().is_ok());

        let mut case = ValidationCase::default();
        let validation = case.read_map(&object(json!({
            "raw": "14:30:00",
            "expected": "14:30:00",
        })));
        assert!(validation.is_success());
        assert!(case.validate_model().is_ok());

        let mut case = ValidationCase::default();
        let validation = case.read_map(&object(json!({
            "expected": { "hour": 24, "minute": 0, "second": 0 },
        })));
        assert_eq!(validation.invalid_params(), vec!["raw", "expected"]);

        let mut case = ValidationCase::default();
        let validation = case.read_map(&object(json!({
            "raw": "00:00:00",
            "expected": { "hour": "11", "minute": -5, "second": 1.5 },
        })));
        assert_eq!(
            validation.invalid_params(),
            vec!["expected.hour", "expected.minute", "expected.second"]
        );

        let mut case = ValidationCase::new("12:00:00", Time::try_new(12, 0, 0).unwrap());
        let validation = case.read_map(&object(json!({
            "raw": "11:00:00",
            "expected": { "hour": 11 },
        })));
        assert_eq!(
            validation.invalid_params(),
            vec!["expected.minute", "expected.second"]
        );
        assert_eq!(case.expected(), Time::try_new(12, 0, 0).unwrap());
    }

    #[test]
    fn it_converts_json_object() {
        let case = ValidationCase::try_from_map(object(json!({
            "raw": "09:05:00",
            "expected": "09:05:01",
        })))
        .unwrap();
        assert!(case.check().unwrap_err().is_mismatch());

        let map = case.into_map().unwrap();
        assert_eq!(map.get("expected"), Some(&json!("09:05:01")));

        assert!(
            ValidationCase::try_from_map(object(json!({
                "raw": "09:05:00",
                "expected": "9:05",
            })))
            .is_err()
        );
    }
}
