//! Extension traits for frequently used types.

mod json_object;
mod toml_table;

pub use json_object::JsonObjectExt;
pub use toml_table::TomlTableExt;
