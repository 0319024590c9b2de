//! SQLite schema definitions
//!
//! DCIM record tables. Booleans are stored as 0/1 integers and interface form
//! factors as their integer codes.

/// Current schema version
pub const SCHEMA_VERSION: i32 = 2;

/// Complete schema SQL
pub const SCHEMA: &str = r#"
-- =============================================================================
-- Infrastructure: Schema version tracking
-- =============================================================================
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    version INTEGER NOT NULL,
    applied_at INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL,
    execution_time_ms INTEGER,
    success INTEGER NOT NULL DEFAULT 1
);

-- =============================================================================
-- 1. Organisation: regions, tenants, users
-- =============================================================================
CREATE TABLE IF NOT EXISTS regions (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE,
    parent_id INTEGER REFERENCES regions(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS tenants (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE
);

-- =============================================================================
-- 2. Sites and racks
-- =============================================================================
CREATE TABLE IF NOT EXISTS sites (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE,
    region_id INTEGER REFERENCES regions(id) ON DELETE SET NULL,
    tenant_id INTEGER REFERENCES tenants(id) ON DELETE SET NULL,
    facility TEXT NOT NULL DEFAULT '',
    asn INTEGER,
    physical_address TEXT NOT NULL DEFAULT '',
    shipping_address TEXT NOT NULL DEFAULT '',
    comments TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_sites_region ON sites(region_id);
CREATE INDEX IF NOT EXISTS idx_sites_tenant ON sites(tenant_id);

CREATE TABLE IF NOT EXISTS rack_groups (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    slug TEXT NOT NULL,
    site_id INTEGER NOT NULL REFERENCES sites(id) ON DELETE CASCADE,
    UNIQUE (site_id, name),
    UNIQUE (site_id, slug)
);

CREATE TABLE IF NOT EXISTS rack_roles (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS racks (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    facility_id TEXT,
    site_id INTEGER NOT NULL REFERENCES sites(id) ON DELETE CASCADE,
    group_id INTEGER REFERENCES rack_groups(id) ON DELETE SET NULL,
    tenant_id INTEGER REFERENCES tenants(id) ON DELETE SET NULL,
    role_id INTEGER REFERENCES rack_roles(id) ON DELETE SET NULL,
    u_height INTEGER NOT NULL DEFAULT 42 CHECK (u_height BETWEEN 1 AND 100),
    comments TEXT NOT NULL DEFAULT '',
    UNIQUE (site_id, name)
);

CREATE INDEX IF NOT EXISTS idx_racks_site ON racks(site_id);
CREATE INDEX IF NOT EXISTS idx_racks_group ON racks(group_id);

CREATE TABLE IF NOT EXISTS rack_reservations (
    id INTEGER PRIMARY KEY,
    rack_id INTEGER NOT NULL REFERENCES racks(id) ON DELETE CASCADE,
    user_id INTEGER NOT NULL REFERENCES users(id),
    description TEXT NOT NULL DEFAULT ''
);

-- =============================================================================
-- 3. Device types
-- =============================================================================
CREATE TABLE IF NOT EXISTS manufacturers (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS device_types (
    id INTEGER PRIMARY KEY,
    manufacturer_id INTEGER NOT NULL REFERENCES manufacturers(id),
    model TEXT NOT NULL,
    slug TEXT NOT NULL,
    part_number TEXT NOT NULL DEFAULT '',
    u_height INTEGER NOT NULL DEFAULT 1,
    is_console_server INTEGER NOT NULL DEFAULT 0 CHECK (is_console_server IN (0, 1)),
    is_pdu INTEGER NOT NULL DEFAULT 0 CHECK (is_pdu IN (0, 1)),
    is_network_device INTEGER NOT NULL DEFAULT 1 CHECK (is_network_device IN (0, 1)),
    subdevice_role INTEGER CHECK (subdevice_role IS NULL OR subdevice_role IN (0, 1)),
    comments TEXT NOT NULL DEFAULT '',
    UNIQUE (manufacturer_id, model),
    UNIQUE (manufacturer_id, slug)
);

-- =============================================================================
-- 4. Devices
-- =============================================================================
CREATE TABLE IF NOT EXISTS device_roles (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS platforms (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS devices (
    id INTEGER PRIMARY KEY,
    name TEXT UNIQUE,
    device_type_id INTEGER NOT NULL REFERENCES device_types(id),
    device_role_id INTEGER NOT NULL REFERENCES device_roles(id),
    tenant_id INTEGER REFERENCES tenants(id) ON DELETE SET NULL,
    platform_id INTEGER REFERENCES platforms(id) ON DELETE SET NULL,
    serial TEXT NOT NULL DEFAULT '',
    asset_tag TEXT UNIQUE,
    site_id INTEGER NOT NULL REFERENCES sites(id),
    rack_id INTEGER REFERENCES racks(id),
    status INTEGER NOT NULL DEFAULT 1 CHECK (status IN (0, 1)),
    comments TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_devices_site ON devices(site_id);
CREATE INDEX IF NOT EXISTS idx_devices_rack ON devices(rack_id);
CREATE INDEX IF NOT EXISTS idx_devices_type ON devices(device_type_id);

CREATE TABLE IF NOT EXISTS modules (
    id INTEGER PRIMARY KEY,
    device_id INTEGER NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    serial TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_modules_device ON modules(device_id);

-- =============================================================================
-- 5. Device components
-- =============================================================================
CREATE TABLE IF NOT EXISTS console_server_ports (
    id INTEGER PRIMARY KEY,
    device_id INTEGER NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    UNIQUE (device_id, name)
);

CREATE TABLE IF NOT EXISTS console_ports (
    id INTEGER PRIMARY KEY,
    device_id INTEGER NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    cs_port_id INTEGER UNIQUE REFERENCES console_server_ports(id) ON DELETE SET NULL,
    connection_status INTEGER NOT NULL DEFAULT 1 CHECK (connection_status IN (0, 1)),
    UNIQUE (device_id, name)
);

CREATE TABLE IF NOT EXISTS power_outlets (
    id INTEGER PRIMARY KEY,
    device_id INTEGER NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    UNIQUE (device_id, name)
);

CREATE TABLE IF NOT EXISTS power_ports (
    id INTEGER PRIMARY KEY,
    device_id INTEGER NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    power_outlet_id INTEGER UNIQUE REFERENCES power_outlets(id) ON DELETE SET NULL,
    connection_status INTEGER NOT NULL DEFAULT 1 CHECK (connection_status IN (0, 1)),
    UNIQUE (device_id, name)
);

CREATE TABLE IF NOT EXISTS interfaces (
    id INTEGER PRIMARY KEY,
    device_id INTEGER NOT NULL REFERENCES devices(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    form_factor INTEGER NOT NULL DEFAULT 1200,
    mac_address TEXT,
    mgmt_only INTEGER NOT NULL DEFAULT 0 CHECK (mgmt_only IN (0, 1)),
    description TEXT NOT NULL DEFAULT '',
    UNIQUE (device_id, name)
);

CREATE INDEX IF NOT EXISTS idx_interfaces_mac ON interfaces(mac_address);

CREATE TABLE IF NOT EXISTS interface_connections (
    id INTEGER PRIMARY KEY,
    interface_a_id INTEGER NOT NULL UNIQUE REFERENCES interfaces(id) ON DELETE CASCADE,
    interface_b_id INTEGER NOT NULL UNIQUE REFERENCES interfaces(id) ON DELETE CASCADE,
    connection_status INTEGER NOT NULL DEFAULT 1 CHECK (connection_status IN (0, 1))
);

-- =============================================================================
-- 6. Custom fields
-- =============================================================================
CREATE TABLE IF NOT EXISTS custom_fields (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    label TEXT NOT NULL DEFAULT '',
    field_type TEXT NOT NULL DEFAULT 'text' CHECK (field_type IN ('text', 'integer', 'boolean', 'select')),
    obj_type TEXT NOT NULL,
    is_filterable INTEGER NOT NULL DEFAULT 1 CHECK (is_filterable IN (0, 1))
);

CREATE INDEX IF NOT EXISTS idx_custom_fields_obj_type ON custom_fields(obj_type);

CREATE TABLE IF NOT EXISTS custom_field_values (
    field_id INTEGER NOT NULL REFERENCES custom_fields(id) ON DELETE CASCADE,
    obj_type TEXT NOT NULL,
    obj_id INTEGER NOT NULL,
    serialized_value TEXT NOT NULL,
    PRIMARY KEY (field_id, obj_type, obj_id)
);

CREATE INDEX IF NOT EXISTS idx_custom_field_values_obj ON custom_field_values(obj_type, obj_id);
"#;
