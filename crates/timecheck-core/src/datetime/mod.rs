//! Time-of-day values with a strict `HH:MM:SS` text encoding.

mod time;

pub use time::{ParseTimeError, Time, TimeField};
