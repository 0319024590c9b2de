//! Filter set definitions
//!
//! One static [`FilterSet`] per listed resource. Parameters not named by a set
//! are ignored.

use super::custom_fields;
use super::fields::{FieldType, FilterDef, FilterDescriptor, FilterKind, Hop, LookupKey, hop};
use super::params::QueryParams;
use super::search;
use super::types::Condition;
use crate::data::types::CustomFieldRow;

/// Named, ordered collection of filters over one table
#[derive(Debug)]
pub struct FilterSet {
    /// URL segment of the resource, e.g. `device-types`
    pub resource: &'static str,
    pub table: &'static str,
    /// Object type under which custom fields are registered
    pub custom_fields: Option<&'static str>,
    /// Fixed restriction applied before any parameter
    pub scope: Condition,
    pub filters: &'static [FilterDef],
}

impl FilterSet {
    /// Conjunction of the scope and every active filter
    pub fn apply(&self, params: &QueryParams, custom_fields: &[CustomFieldRow]) -> Condition {
        let mut terms = vec![self.scope.clone()];
        terms.extend(self.filters.iter().map(|f| f.apply(params)));
        if self.custom_fields.is_some() {
            terms.push(custom_fields::apply(custom_fields, params));
        }
        Condition::all(terms)
    }

    pub fn describe(&self, custom_fields: &[CustomFieldRow]) -> Vec<FilterDescriptor> {
        let mut descriptors: Vec<FilterDescriptor> =
            self.filters.iter().map(FilterDef::describe).collect();
        if self.custom_fields.is_some() {
            descriptors.extend(custom_fields.iter().map(custom_fields::describe));
        }
        descriptors
    }
}

// ============================================================================
// Relation paths
// ============================================================================

const REGION: &[Hop] = &[hop("region_id", "regions")];
const TENANT: &[Hop] = &[hop("tenant_id", "tenants")];
const SITE: &[Hop] = &[hop("site_id", "sites")];
const RACK: &[Hop] = &[hop("rack_id", "racks")];
const RACK_GROUP: &[Hop] = &[hop("group_id", "rack_groups")];
const RACK_ROLE: &[Hop] = &[hop("role_id", "rack_roles")];
const MANUFACTURER: &[Hop] = &[hop("manufacturer_id", "manufacturers")];
const DEVICE: &[Hop] = &[hop("device_id", "devices")];
const DEVICE_TYPE: &[Hop] = &[hop("device_type_id", "device_types")];
const DEVICE_ROLE: &[Hop] = &[hop("device_role_id", "device_roles")];
const DEVICE_RACK_GROUP: &[Hop] = &[hop("rack_id", "racks"), hop("group_id", "rack_groups")];
const DEVICE_MANUFACTURER: &[Hop] = &[
    hop("device_type_id", "device_types"),
    hop("manufacturer_id", "manufacturers"),
];
const PLATFORM: &[Hop] = &[hop("platform_id", "platforms")];

// ============================================================================
// Filter builders
// ============================================================================

const fn by_id(
    name: &'static str,
    label: &'static str,
    path: &'static [Hop],
    nullable: bool,
) -> FilterDef {
    FilterDef::new(
        name,
        label,
        FilterKind::Choice {
            path,
            key: LookupKey::Id,
            nullable,
        },
    )
}

const fn by_field(
    name: &'static str,
    label: &'static str,
    path: &'static [Hop],
    field: &'static str,
    nullable: bool,
) -> FilterDef {
    FilterDef::new(
        name,
        label,
        FilterKind::Choice {
            path,
            key: LookupKey::Field(field),
            nullable,
        },
    )
}

const fn exact(name: &'static str, ty: FieldType) -> FilterDef {
    FilterDef::new(name, name, FilterKind::Exact { column: name, ty })
}

const fn flag(
    name: &'static str,
    label: &'static str,
    path: &'static [Hop],
    column: &'static str,
) -> FilterDef {
    FilterDef::new(name, label, FilterKind::Boolean { path, column })
}

const fn method(
    name: &'static str,
    label: &'static str,
    f: fn(&str) -> Condition,
) -> FilterDef {
    FilterDef::new(name, label, FilterKind::Method(f))
}

const ID_IN: FilterDef = FilterDef::new("id__in", "ID", FilterKind::IdIn);

// ============================================================================
// Sites and racks
// ============================================================================

pub static SITES: FilterSet = FilterSet {
    resource: "sites",
    table: "sites",
    custom_fields: Some("site"),
    scope: Condition::Always,
    filters: &[
        ID_IN,
        method("q", "Search", search::search_sites),
        by_id("region_id", "Region (ID)", REGION, true),
        by_field("region", "Region (slug)", REGION, "slug", true),
        by_id("tenant_id", "Tenant (ID)", TENANT, true),
        by_field("tenant", "Tenant (slug)", TENANT, "slug", true),
        exact("name", FieldType::Text),
        exact("facility", FieldType::Text),
        exact("asn", FieldType::Int),
    ],
};

pub static RACK_GROUPS: FilterSet = FilterSet {
    resource: "rack-groups",
    table: "rack_groups",
    custom_fields: None,
    scope: Condition::Always,
    filters: &[
        by_id("site_id", "Site (ID)", SITE, false),
        by_field("site", "Site (slug)", SITE, "slug", false),
        exact("name", FieldType::Text),
    ],
};

pub static RACKS: FilterSet = FilterSet {
    resource: "racks",
    table: "racks",
    custom_fields: Some("rack"),
    scope: Condition::Always,
    filters: &[
        ID_IN,
        method("q", "Search", search::search_racks),
        by_id("site_id", "Site (ID)", SITE, false),
        by_field("site", "Site (slug)", SITE, "slug", false),
        by_id("group_id", "Group (ID)", RACK_GROUP, true),
        by_field("group", "Group", RACK_GROUP, "slug", true),
        by_id("tenant_id", "Tenant (ID)", TENANT, true),
        by_field("tenant", "Tenant (slug)", TENANT, "slug", true),
        by_id("role_id", "Role (ID)", RACK_ROLE, true),
        by_field("role", "Role (slug)", RACK_ROLE, "slug", true),
        exact("u_height", FieldType::Int),
    ],
};

pub static RACK_RESERVATIONS: FilterSet = FilterSet {
    resource: "rack-reservations",
    table: "rack_reservations",
    custom_fields: None,
    scope: Condition::Always,
    filters: &[
        by_id("rack_id", "Rack (ID)", RACK, false),
        FilterDef::new(
            "rack",
            "rack",
            FilterKind::Exact {
                column: "rack_id",
                ty: FieldType::Int,
            },
        ),
        FilterDef::new(
            "user",
            "user",
            FilterKind::Exact {
                column: "user_id",
                ty: FieldType::Int,
            },
        ),
    ],
};

// ============================================================================
// Device types and devices
// ============================================================================

pub static DEVICE_TYPES: FilterSet = FilterSet {
    resource: "device-types",
    table: "device_types",
    custom_fields: Some("devicetype"),
    scope: Condition::Always,
    filters: &[
        ID_IN,
        method("q", "Search", search::search_device_types),
        by_id("manufacturer_id", "Manufacturer (ID)", MANUFACTURER, false),
        by_field(
            "manufacturer",
            "Manufacturer (slug)",
            MANUFACTURER,
            "slug",
            false,
        ),
        exact("model", FieldType::Text),
        exact("part_number", FieldType::Text),
        exact("u_height", FieldType::Int),
        exact("is_console_server", FieldType::Bool),
        exact("is_pdu", FieldType::Bool),
        exact("is_network_device", FieldType::Bool),
        exact("subdevice_role", FieldType::Bool),
    ],
};

pub static DEVICES: FilterSet = FilterSet {
    resource: "devices",
    table: "devices",
    custom_fields: Some("device"),
    scope: Condition::Always,
    filters: &[
        ID_IN,
        method("q", "Search", search::search_devices),
        method("mac_address", "MAC address", search::filter_mac_address),
        by_id("site_id", "Site (ID)", SITE, false),
        by_field("site", "Site name (slug)", SITE, "slug", false),
        by_id("rack_group_id", "Rack group (ID)", DEVICE_RACK_GROUP, false),
        by_id("rack_id", "Rack (ID)", RACK, true),
        by_id("role_id", "Role (ID)", DEVICE_ROLE, false),
        by_field("role", "Role (slug)", DEVICE_ROLE, "slug", false),
        by_id("tenant_id", "Tenant (ID)", TENANT, true),
        by_field("tenant", "Tenant (slug)", TENANT, "slug", true),
        by_id("device_type_id", "Device type (ID)", DEVICE_TYPE, false),
        by_id(
            "manufacturer_id",
            "Manufacturer (ID)",
            DEVICE_MANUFACTURER,
            false,
        ),
        by_field(
            "manufacturer",
            "Manufacturer (slug)",
            DEVICE_MANUFACTURER,
            "slug",
            false,
        ),
        by_field("model", "Device model (slug)", DEVICE_TYPE, "slug", false),
        by_id("platform_id", "Platform (ID)", PLATFORM, true),
        by_field("platform", "Platform (slug)", PLATFORM, "slug", true),
        flag("status", "Status", &[], "status"),
        flag(
            "is_console_server",
            "Is a console server",
            DEVICE_TYPE,
            "is_console_server",
        ),
        flag("is_pdu", "Is a PDU", DEVICE_TYPE, "is_pdu"),
        flag(
            "is_network_device",
            "Is a network device",
            DEVICE_TYPE,
            "is_network_device",
        ),
        exact("name", FieldType::Text),
        exact("serial", FieldType::Text),
        exact("asset_tag", FieldType::Text),
    ],
};

// ============================================================================
// Device components
// ============================================================================

const DEVICE_COMPONENT_FILTERS: [FilterDef; 3] = [
    by_id("device_id", "Device (ID)", DEVICE, false),
    by_field("device", "Device (name)", DEVICE, "name", false),
    exact("name", FieldType::Text),
];

pub static CONSOLE_PORTS: FilterSet = FilterSet {
    resource: "console-ports",
    table: "console_ports",
    custom_fields: None,
    scope: Condition::Always,
    filters: &DEVICE_COMPONENT_FILTERS,
};

pub static CONSOLE_SERVER_PORTS: FilterSet = FilterSet {
    resource: "console-server-ports",
    table: "console_server_ports",
    custom_fields: None,
    scope: Condition::Always,
    filters: &DEVICE_COMPONENT_FILTERS,
};

pub static POWER_PORTS: FilterSet = FilterSet {
    resource: "power-ports",
    table: "power_ports",
    custom_fields: None,
    scope: Condition::Always,
    filters: &DEVICE_COMPONENT_FILTERS,
};

pub static POWER_OUTLETS: FilterSet = FilterSet {
    resource: "power-outlets",
    table: "power_outlets",
    custom_fields: None,
    scope: Condition::Always,
    filters: &DEVICE_COMPONENT_FILTERS,
};

pub static INTERFACES: FilterSet = FilterSet {
    resource: "interfaces",
    table: "interfaces",
    custom_fields: None,
    scope: Condition::Always,
    filters: &[
        DEVICE_COMPONENT_FILTERS[0],
        DEVICE_COMPONENT_FILTERS[1],
        method("type", "Interface type", search::filter_interface_type),
        DEVICE_COMPONENT_FILTERS[2],
    ],
};

// ============================================================================
// Connections
// ============================================================================

pub static CONSOLE_CONNECTIONS: FilterSet = FilterSet {
    resource: "console-connections",
    table: "console_ports",
    custom_fields: None,
    scope: Condition::NotNull {
        column: "cs_port_id",
    },
    filters: &[method(
        "site",
        "Site (slug)",
        search::filter_console_connection_site,
    )],
};

pub static POWER_CONNECTIONS: FilterSet = FilterSet {
    resource: "power-connections",
    table: "power_ports",
    custom_fields: None,
    scope: Condition::NotNull {
        column: "power_outlet_id",
    },
    filters: &[method(
        "site",
        "Site (slug)",
        search::filter_power_connection_site,
    )],
};

pub static INTERFACE_CONNECTIONS: FilterSet = FilterSet {
    resource: "interface-connections",
    table: "interface_connections",
    custom_fields: None,
    scope: Condition::Always,
    filters: &[method(
        "site",
        "Site (slug)",
        search::filter_interface_connection_site,
    )],
};

/// Every filter set, in listing order
pub static ALL: &[&FilterSet] = &[
    &SITES,
    &RACK_GROUPS,
    &RACKS,
    &RACK_RESERVATIONS,
    &DEVICE_TYPES,
    &DEVICES,
    &CONSOLE_PORTS,
    &CONSOLE_SERVER_PORTS,
    &POWER_PORTS,
    &POWER_OUTLETS,
    &INTERFACES,
    &CONSOLE_CONNECTIONS,
    &POWER_CONNECTIONS,
    &INTERFACE_CONNECTIONS,
];

/// Look up a filter set by its resource segment
pub fn find(resource: &str) -> Option<&'static FilterSet> {
    ALL.iter().copied().find(|set| set.resource == resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::types::{SqlParams, SqlValue};
    use crate::data::types::CustomFieldType;

    fn params(pairs: &[(&str, &str)]) -> QueryParams {
        pairs.iter().copied().collect()
    }

    fn render(condition: &Condition) -> (String, Vec<SqlValue>) {
        let mut params = SqlParams::default();
        let sql = condition.to_sql(&mut params);
        (sql, params.values)
    }

    #[test]
    fn resources_are_unique_and_found() {
        for set in ALL {
            assert!(std::ptr::eq(find(set.resource).unwrap(), *set));
        }
        assert_eq!(ALL.len(), 14);
        assert!(find("circuits").is_none());
    }

    #[test]
    fn parameter_names_are_unique_per_set() {
        for set in ALL {
            let mut names: Vec<&str> = set.filters.iter().map(|f| f.name).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(before, names.len(), "duplicate parameter in {}", set.resource);
        }
    }

    #[test]
    fn no_params_applies_only_scope() {
        assert!(SITES.apply(&params(&[]), &[]).is_always());
        assert_eq!(
            CONSOLE_CONNECTIONS.apply(&params(&[]), &[]),
            Condition::NotNull {
                column: "cs_port_id"
            }
        );
    }

    #[test]
    fn unknown_params_are_ignored() {
        let condition = DEVICES.apply(&params(&[("page", "2"), ("colour", "red")]), &[]);
        assert!(condition.is_always());
    }

    #[test]
    fn filters_are_conjoined() {
        let condition = RACKS.apply(&params(&[("site", "ams1"), ("u_height", "42")]), &[]);
        let (sql, values) = render(&condition);
        assert_eq!(
            sql,
            "((SELECT COUNT(DISTINCT t1.slug) FROM sites t1 WHERE t1.slug IN (?)) = 1 \
             AND r.site_id IN (SELECT t2.id FROM sites t2 WHERE t2.slug IN (?)) \
             AND r.u_height = ?)"
        );
        assert_eq!(
            values,
            vec![SqlValue::from("ams1"), SqlValue::from("ams1"), SqlValue::Int(42)]
        );
    }

    #[test]
    fn device_rack_group_follows_rack() {
        let condition = DEVICES.apply(&params(&[("rack_group_id", "3")]), &[]);
        let (sql, _) = render(&condition);
        assert_eq!(
            sql,
            "((SELECT COUNT(DISTINCT t1.id) FROM rack_groups t1 WHERE t1.id IN (?)) = 1 \
             AND r.rack_id IN (SELECT t2.id FROM racks t2 WHERE t2.group_id IN (?)))"
        );
    }

    #[test]
    fn device_status_is_a_local_flag() {
        let condition = DEVICES.apply(&params(&[("status", "false")]), &[]);
        assert_eq!(condition, Condition::eq("status", false));
    }

    #[test]
    fn device_component_sets_share_filters() {
        let condition = POWER_OUTLETS.apply(&params(&[("device", "pdu-01")]), &[]);
        let (sql, _) = render(&condition);
        assert_eq!(
            sql,
            "((SELECT COUNT(DISTINCT t1.name) FROM devices t1 WHERE t1.name IN (?)) = 1 \
             AND r.device_id IN (SELECT t2.id FROM devices t2 WHERE t2.name IN (?)))"
        );
        let names: Vec<&str> = INTERFACES.filters.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["device_id", "device", "type", "name"]);
    }

    #[test]
    fn rack_reservation_exact_fields_use_foreign_keys() {
        let condition = RACK_RESERVATIONS.apply(&params(&[("user", "5")]), &[]);
        assert_eq!(condition, Condition::eq("user_id", 5i64));
    }

    #[test]
    fn custom_fields_only_for_enabled_sets() {
        let fields = vec![CustomFieldRow {
            id: 1,
            name: "owner".to_string(),
            label: "Owner".to_string(),
            field_type: CustomFieldType::Text,
            obj_type: "site".to_string(),
        }];
        let p = params(&[("cf_owner", "ops")]);
        assert!(matches!(SITES.apply(&p, &fields), Condition::Exists { .. }));
        assert!(RACK_GROUPS.apply(&p, &fields).is_always());

        let described = SITES.describe(&fields);
        assert_eq!(described.last().map(|d| d.name.as_str()), Some("cf_owner"));
        assert_eq!(RACK_GROUPS.describe(&fields).len(), RACK_GROUPS.filters.len());
    }
}
