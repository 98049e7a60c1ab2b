use self::ParseTimeError::*;
use crate::{JsonValue, error::Error};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{error, fmt, str::FromStr};

/// Length of the `HH:MM:SS` encoding in bytes.
const ENCODED_LEN: usize = 8;

/// Byte offsets of the two `:` separators.
const SEPARATOR_POSITIONS: [usize; 2] = [2, 5];

/// A field of a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// The hour, from 0 to 23.
    Hour,
    /// The minute, from 0 to 59.
    Minute,
    /// The second, from 0 to 59.
    Second,
}

impl TimeField {
    /// Returns the largest value the field can take.
    #[inline]
    pub fn max_value(&self) -> u32 {
        match self {
            TimeField::Hour => 23,
            TimeField::Minute | TimeField::Second => 59,
        }
    }

    /// Returns `self` as `&'static str`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
        }
    }

    /// Checks that `value` is in range for the field.
    #[inline]
    fn check(self, value: u32) -> Result<u32, ParseTimeError> {
        if value > self.max_value() {
            Err(OutOfRange { field: self, value })
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for TimeField {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error resulting from parsing a time from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTimeError {
    /// The input is not exactly 8 bytes long.
    InvalidLength(usize),
    /// A `:` separator is missing.
    InvalidSeparator {
        /// Byte offset in the input.
        position: usize,
        /// The character found instead.
        found: char,
    },
    /// A field contains something other than an ASCII digit.
    InvalidDigit {
        /// Byte offset in the input.
        position: usize,
        /// The character found instead.
        found: char,
    },
    /// A field is outside of its range.
    OutOfRange {
        /// The offending field.
        field: TimeField,
        /// The parsed value.
        value: u32,
    },
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidLength(len) => {
                write!(f, "invalid length: expected `HH:MM:SS` with 8 bytes, found {len}")
            }
            InvalidSeparator { position, found } => {
                write!(f, "invalid separator `{found}` at position {position}: expected `:`")
            }
            InvalidDigit { position, found } => {
                write!(f, "invalid digit `{found}` at position {position}")
            }
            OutOfRange { field, value } => {
                let max_value = field.max_value();
                write!(f, "{field} `{value}` is out of range 0..={max_value}")
            }
        }
    }
}

impl error::Error for ParseTimeError {}

/// A time of day with second precision, backed by [`chrono::NaiveTime`].
///
/// The only accepted text encoding is the zero-padded 24-hour `HH:MM:SS`.
/// Fractional seconds and leap seconds are never represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(NaiveTime);

impl Time {
    /// Attempts to create a new instance.
    #[inline]
    pub fn try_new(hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(|| {
                let message = format!(
                    "fail to create a time from hour: `{hour}`, minute: `{minute}`, second: `{second}`"
                );
                Error::new(message)
            })
    }

    /// Returns a new instance which corresponds to the midnight.
    #[inline]
    pub fn midnight() -> Self {
        Self(NaiveTime::MIN)
    }

    /// Returns the number of seconds past the last midnight.
    #[inline]
    pub fn num_secs_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Formats the time with the specified format string.
    /// See [`format::strftime`](chrono::format::strftime) for the supported escape sequences.
    #[inline]
    pub fn format(&self, fmt: &str) -> String {
        format!("{}", self.0.format(fmt))
    }

    /// Returns the hour number from 0 to 23.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute number from 0 to 59.
    #[inline]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second number from 0 to 59.
    #[inline]
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl Default for Time {
    /// Returns an instance which corresponds to **the midnight**.
    #[inline]
    fn default() -> Self {
        Self::midnight()
    }
}

impl fmt::Display for Time {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

impl FromStr for Time {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != ENCODED_LEN {
            return Err(InvalidLength(s.len()));
        }
        for (position, found) in s.char_indices() {
            if SEPARATOR_POSITIONS.contains(&position) {
                if found != ':' {
                    return Err(InvalidSeparator { position, found });
                }
            } else if !found.is_ascii_digit() {
                return Err(InvalidDigit { position, found });
            }
        }

        let bytes = s.as_bytes();
        let field_value = |offset: usize| {
            u32::from(bytes[offset] - b'0') * 10 + u32::from(bytes[offset + 1] - b'0')
        };
        let hour = TimeField::Hour.check(field_value(0))?;
        let minute = TimeField::Minute.check(field_value(3))?;
        let second = TimeField::Second.check(field_value(6))?;
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or(OutOfRange {
                field: TimeField::Second,
                value: second,
            })
    }
}

impl Serialize for Time {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl TryFrom<NaiveTime> for Time {
    type Error = Error;

    fn try_from(t: NaiveTime) -> Result<Self, Self::Error> {
        if t.nanosecond() != 0 {
            let message = format!("time `{t}` has a fractional or leap second");
            return Err(Error::new(message));
        }
        Ok(Self(t))
    }
}

impl From<Time> for NaiveTime {
    #[inline]
    fn from(t: Time) -> Self {
        t.0
    }
}

impl From<Time> for JsonValue {
    #[inline]
    fn from(t: Time) -> Self {
        JsonValue::String(t.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{ParseTimeError, Time, TimeField};
    use chrono::NaiveTime;

    #[test]
    fn it_parses_time() {
        let time = "11:45:23".parse::<Time>().unwrap();
        assert_eq!(time, Time::try_new(11, 45, 23).unwrap());
        assert_eq!((time.hour(), time.minute(), time.second()), (11, 45, 23));
        assert_eq!("00:00:00".parse::<Time>().unwrap(), Time::midnight());
        assert_eq!(
            "23:59:59".parse::<Time>().unwrap().num_secs_from_midnight(),
            86_399
        );
    }

    #[test]
    fn it_rejects_malformed_time() {
        assert_eq!(
            "14-30-00".parse::<Time>(),
            Err(ParseTimeError::InvalidSeparator {
                position: 2,
                found: '-'
            })
        );
        assert_eq!("9:05:00".parse::<Time>(), Err(ParseTimeError::InvalidLength(7)));
        assert_eq!("09:05".parse::<Time>(), Err(ParseTimeError::InvalidLength(5)));
        assert_eq!(
            "11:45:23.5".parse::<Time>(),
            Err(ParseTimeError::InvalidLength(10))
        );
        assert_eq!(
            "1a:45:23".parse::<Time>(),
            Err(ParseTimeError::InvalidDigit {
                position: 1,
                found: 'a'
            })
        );
        assert_eq!(
            "+1:45:23".parse::<Time>(),
            Err(ParseTimeError::InvalidDigit {
                position: 0,
                found: '+'
            })
        );
        assert!("１:45:23".parse::<Time>().is_err());
        assert!("".parse::<Time>().is_err());
    }

    #[test]
    fn it_rejects_out_of_range_fields() {
        assert_eq!(
            "25:00:00".parse::<Time>(),
            Err(ParseTimeError::OutOfRange {
                field: TimeField::Hour,
                value: 25
            })
        );
        assert_eq!(
            "12:60:00".parse::<Time>(),
            Err(ParseTimeError::OutOfRange {
                field: TimeField::Minute,
                value: 60
            })
        );
        assert_eq!(
            "23:59:60".parse::<Time>(),
            Err(ParseTimeError::OutOfRange {
                field: TimeField::Second,
                value: 60
            })
        );
        assert!(Time::try_new(24, 0, 0).is_err());
        assert!(Time::try_new(0, 0, 60).is_err());
    }

    #[test]
    fn it_formats_time() {
        let time = Time::try_new(9, 5, 0).unwrap();
        assert_eq!(time.to_string(), "09:05:00");
        assert_eq!(time.format("%I:%M %p"), "09:05 AM");
        assert_eq!(serde_json::to_string(&time).unwrap(), r#""09:05:00""#);
        assert_eq!(
            serde_json::from_str::<Time>(r#""09:05:00""#).unwrap(),
            time
        );
        assert!(serde_json::from_str::<Time>(r#""09-05-00""#).is_err());
    }

    #[test]
    fn it_converts_naive_time() {
        let naive = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let time = Time::try_from(naive).unwrap();
        assert_eq!(NaiveTime::from(time), naive);

        let precise = NaiveTime::from_hms_milli_opt(14, 30, 0, 500).unwrap();
        assert!(Time::try_from(precise).is_err());
    }
}
