//! SQLite repositories
//!
//! Types (SiteRow, DeviceRow, etc.) should be imported from `crate::data::types`.

pub mod dcim;
#[cfg(test)]
pub(crate) mod fixtures;

pub use dcim::{Record, list_custom_fields, list_records};
