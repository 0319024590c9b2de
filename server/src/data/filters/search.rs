//! Custom filter methods
//!
//! Free-text search, hardware address lookup, interface category and the
//! `site` filters of the connection sets. Each function receives the raw
//! (non-empty) parameter value and compares it trimmed.

use super::fields::{Hop, hop, through};
use super::mac::MacAddress;
use super::types::{Condition, SqlValue};
use crate::data::types::{FormFactor, InterfaceKind};

const DEVICE_SITE: &[Hop] = &[hop("device_id", "devices"), hop("site_id", "sites")];

/// Sites: name, facility, addresses and comments; ASN when numeric
pub fn search_sites(value: &str) -> Condition {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Condition::Always;
    }
    let mut terms = vec![
        Condition::contains("name", trimmed),
        Condition::contains("facility", trimmed),
        Condition::contains("physical_address", trimmed),
        Condition::contains("shipping_address", trimmed),
        Condition::contains("comments", trimmed),
    ];
    if let Ok(asn) = trimmed.parse::<i64>() {
        terms.push(Condition::eq("asn", asn));
    }
    Condition::any(terms)
}

/// Racks: name, facility ID and comments
pub fn search_racks(value: &str) -> Condition {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Condition::Always;
    }
    Condition::any([
        Condition::contains("name", trimmed),
        Condition::contains("facility_id", trimmed),
        Condition::contains("comments", trimmed),
    ])
}

/// Device types: manufacturer name, model, part number and comments
pub fn search_device_types(value: &str) -> Condition {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Condition::Always;
    }
    Condition::any([
        Condition::related(
            "manufacturer_id",
            "manufacturers",
            Condition::contains("name", trimmed),
        ),
        Condition::contains("model", trimmed),
        Condition::contains("part_number", trimmed),
        Condition::contains("comments", trimmed),
    ])
}

/// Devices: name, serial, module serials, asset tag and comments
///
/// A device matches once however many modules match.
pub fn search_devices(value: &str) -> Condition {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Condition::Always;
    }
    Condition::any([
        Condition::contains("name", trimmed),
        Condition::contains("serial", trimmed),
        Condition::exists("modules", "device_id", Condition::contains("serial", trimmed)),
        Condition::eq("asset_tag", trimmed),
        Condition::contains("comments", trimmed),
    ])
}

/// Devices with at least one interface carrying the given MAC address
///
/// An address that does not parse matches nothing.
pub fn filter_mac_address(value: &str) -> Condition {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Condition::Always;
    }
    match trimmed.parse::<MacAddress>() {
        Ok(mac) => Condition::exists(
            "interfaces",
            "device_id",
            Condition::eq("mac_address", mac.to_string()),
        ),
        Err(e) => {
            tracing::debug!(error = %e, "MAC address filter matches nothing");
            Condition::Never
        }
    }
}

/// Interfaces by category: `physical`, `virtual` or `lag`; other values pass through
pub fn filter_interface_type(value: &str) -> Condition {
    let virtual_codes = || Condition::In {
        column: "form_factor",
        values: FormFactor::VIRTUAL
            .iter()
            .map(|ff| SqlValue::Int(ff.code()))
            .collect(),
    };
    match InterfaceKind::from_param(value) {
        Some(InterfaceKind::Physical) => Condition::negate(virtual_codes()),
        Some(InterfaceKind::Virtual) => virtual_codes(),
        Some(InterfaceKind::Lag) => Condition::eq("form_factor", FormFactor::Lag.code()),
        None => Condition::Always,
    }
}

/// Console connections whose server port sits on a device at the given site
pub fn filter_console_connection_site(value: &str) -> Condition {
    let slug = value.trim();
    if slug.is_empty() {
        return Condition::Always;
    }
    Condition::related(
        "cs_port_id",
        "console_server_ports",
        through(DEVICE_SITE, Condition::eq("slug", slug)),
    )
}

/// Power connections whose outlet sits on a device at the given site
pub fn filter_power_connection_site(value: &str) -> Condition {
    let slug = value.trim();
    if slug.is_empty() {
        return Condition::Always;
    }
    Condition::related(
        "power_outlet_id",
        "power_outlets",
        through(DEVICE_SITE, Condition::eq("slug", slug)),
    )
}

/// Interface connections with either endpoint on a device at the given site
pub fn filter_interface_connection_site(value: &str) -> Condition {
    let slug = value.trim();
    if slug.is_empty() {
        return Condition::Always;
    }
    let at_site = || through(DEVICE_SITE, Condition::eq("slug", slug));
    Condition::any([
        Condition::related("interface_a_id", "interfaces", at_site()),
        Condition::related("interface_b_id", "interfaces", at_site()),
    ])
}
