//! Shared data types
//!
//! Row types returned by the repositories and the enumerations stored in them.

mod dcim;
mod enums;

pub use dcim::{
    ConsolePortRow, ConsoleServerPortRow, CustomFieldRow, DeviceRow, DeviceTypeRow,
    InterfaceConnectionRow, InterfaceRow, PowerOutletRow, PowerPortRow, RackGroupRow,
    RackReservationRow, RackRow, SiteRow,
};
pub use enums::{CustomFieldType, FormFactor, InterfaceKind};
