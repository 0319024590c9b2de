//! Data storage layer
//!
//! - `sqlite` - Inventory database, schema, migrations and repositories
//! - `filters` - Query filter sets reducing request parameters to SQL predicates
//! - `types` - Row types and enumerations shared with the API

pub mod filters;
pub mod sqlite;
pub mod types;

pub use sqlite::{SqliteError, SqliteService};
