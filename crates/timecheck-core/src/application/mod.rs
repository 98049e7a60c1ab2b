//! Application-level setup shared by binaries and test harnesses.

mod tracing_subscriber;

pub use self::tracing_subscriber::init_tracing;
