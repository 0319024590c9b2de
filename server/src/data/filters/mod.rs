//! Query filter sets for DCIM records
//!
//! Request parameters are reduced to a [`Condition`] by the [`FilterSet`] of
//! the requested resource. Filters only ever narrow a record set; a blank or
//! unrecognised value leaves it unchanged.
//!
//! Usage:
//! ```ignore
//! let params: QueryParams = [("site", "ams1"), ("q", "edge")].into_iter().collect();
//! let condition = sets::DEVICES.apply(&params, &custom_fields);
//! let mut sql_params = SqlParams::default();
//! let where_clause = condition.to_sql(&mut sql_params);
//! ```

pub mod custom_fields;
pub mod fields;
pub mod mac;
pub mod params;
pub mod search;
pub mod sets;
pub mod types;

pub use fields::{FilterDef, FilterDescriptor, FilterKind};
pub use mac::{MacAddress, MacParseError};
pub use params::QueryParams;
pub use sets::FilterSet;
pub use types::{Condition, ROOT_ALIAS, SqlParams, SqlValue};
