//! DCIM record rows
//!
//! One struct per listed table. Foreign keys are exposed as raw IDs; the
//! filter layer resolves slugs and names itself.

use serde::Serialize;
use utoipa::ToSchema;

use super::enums::CustomFieldType;

// ============================================================================
// Sites and racks
// ============================================================================

/// Site row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SiteRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub region_id: Option<i64>,
    pub tenant_id: Option<i64>,
    pub facility: String,
    pub asn: Option<i64>,
    pub physical_address: String,
    pub shipping_address: String,
    pub comments: String,
}

/// Rack group row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RackGroupRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub site_id: i64,
}

/// Rack row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RackRow {
    pub id: i64,
    pub name: String,
    pub facility_id: Option<String>,
    pub site_id: i64,
    pub group_id: Option<i64>,
    pub tenant_id: Option<i64>,
    pub role_id: Option<i64>,
    pub u_height: i64,
    pub comments: String,
}

/// Rack reservation row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RackReservationRow {
    pub id: i64,
    pub rack_id: i64,
    pub user_id: i64,
    pub description: String,
}

// ============================================================================
// Device types and devices
// ============================================================================

/// Device type row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeviceTypeRow {
    pub id: i64,
    pub manufacturer_id: i64,
    pub model: String,
    pub slug: String,
    pub part_number: String,
    pub u_height: i64,
    pub is_console_server: bool,
    pub is_pdu: bool,
    pub is_network_device: bool,
    /// `true` = parent, `false` = child, absent when the type takes no part in nesting
    pub subdevice_role: Option<bool>,
    pub comments: String,
}

/// Device row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeviceRow {
    pub id: i64,
    pub name: Option<String>,
    pub device_type_id: i64,
    pub device_role_id: i64,
    pub tenant_id: Option<i64>,
    pub platform_id: Option<i64>,
    pub serial: String,
    pub asset_tag: Option<String>,
    pub site_id: i64,
    pub rack_id: Option<i64>,
    /// `true` = active
    pub status: bool,
    pub comments: String,
}

// ============================================================================
// Components and connections
// ============================================================================

/// Console port row; also the record of a console connection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConsolePortRow {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
    pub cs_port_id: Option<i64>,
    pub connection_status: bool,
}

/// Console server port row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ConsoleServerPortRow {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
}

/// Power port row; also the record of a power connection
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PowerPortRow {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
    pub power_outlet_id: Option<i64>,
    pub connection_status: bool,
}

/// Power outlet row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PowerOutletRow {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
}

/// Interface row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterfaceRow {
    pub id: i64,
    pub device_id: i64,
    pub name: String,
    /// Integer form factor code
    pub form_factor: i64,
    /// Display label of the form factor, when the code is known
    pub form_factor_label: Option<String>,
    pub mac_address: Option<String>,
    pub mgmt_only: bool,
    pub description: String,
}

/// Interface connection row from database
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterfaceConnectionRow {
    pub id: i64,
    pub interface_a_id: i64,
    pub interface_b_id: i64,
    pub connection_status: bool,
}

// ============================================================================
// Custom fields
// ============================================================================

/// Filterable custom field registered for an object type
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomFieldRow {
    pub id: i64,
    pub name: String,
    pub label: String,
    pub field_type: CustomFieldType,
    pub obj_type: String,
}
