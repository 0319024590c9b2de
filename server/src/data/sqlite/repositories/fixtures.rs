//! Seed inventory shared by repository and route tests
//!
//! Three sites (AMS1 in europe, NYC1 in americas, LAB without a region), five
//! devices, their components and the connections between them.

use sqlx::SqlitePool;

use crate::data::sqlite::schema::SCHEMA;

const SEED: &str = r#"
INSERT INTO regions (id, name, slug) VALUES
    (1, 'Europe', 'europe'),
    (2, 'Americas', 'americas');

INSERT INTO tenants (id, name, slug) VALUES
    (1, 'Acme', 'acme'),
    (2, 'Globex', 'globex');

INSERT INTO users (id, username) VALUES (1, 'alice'), (2, 'bob');

INSERT INTO sites (id, name, slug, region_id, tenant_id, facility, asn) VALUES
    (1, 'AMS1', 'ams1', 1, 1, 'Equinix AM3', 65001),
    (2, 'NYC1', 'nyc1', 2, NULL, 'Digital Realty', 65002),
    (3, 'LAB', 'lab', NULL, 2, '', NULL);

INSERT INTO rack_groups (id, name, slug, site_id) VALUES
    (1, 'Cage A', 'cage-a', 1),
    (2, 'Row 1', 'row-1', 2);

INSERT INTO rack_roles (id, name, slug) VALUES (1, 'Network', 'network');

INSERT INTO racks (id, name, facility_id, site_id, group_id, tenant_id, role_id) VALUES
    (1, 'R101', 'AM3-101', 1, 1, 1, 1),
    (2, 'R102', NULL, 1, NULL, NULL, NULL),
    (3, 'NY-01', NULL, 2, 2, 2, 1);

INSERT INTO rack_reservations (id, rack_id, user_id, description) VALUES
    (1, 1, 1, 'Core refresh'),
    (2, 3, 2, 'Lab staging');

INSERT INTO manufacturers (id, name, slug) VALUES
    (1, 'Juniper', 'juniper'),
    (2, 'Cisco', 'cisco'),
    (3, 'APC', 'apc');

INSERT INTO device_types (id, manufacturer_id, model, slug, part_number, is_console_server, is_pdu, is_network_device, subdevice_role) VALUES
    (1, 1, 'MX480', 'mx480', 'CHAS-BP-MX480', 0, 0, 1, 1),
    (2, 2, 'Catalyst 2960', 'cat2960', 'WS-C2960-24', 0, 0, 1, NULL),
    (3, 3, 'AP7930', 'ap7930', 'AP7930', 0, 1, 0, NULL),
    (4, 2, 'ISR4331', 'isr4331', 'ISR4331/K9', 1, 0, 1, NULL);

INSERT INTO device_roles (id, name, slug) VALUES
    (1, 'Router', 'router'),
    (2, 'Switch', 'switch'),
    (3, 'PDU', 'pdu');

INSERT INTO platforms (id, name, slug) VALUES
    (1, 'Junos', 'junos'),
    (2, 'IOS', 'ios');

INSERT INTO devices (id, name, device_type_id, device_role_id, tenant_id, platform_id, serial, asset_tag, site_id, rack_id, status) VALUES
    (1, 'edge-ams1', 1, 1, 1, 1, 'JN1234', 'A-0001', 1, 1, 1),
    (2, 'sw-ams1', 2, 2, NULL, 2, 'FOC1111', 'A-0002', 1, 2, 1),
    (3, 'pdu-ams1', 3, 3, NULL, NULL, '', NULL, 1, 1, 1),
    (4, 'edge-nyc1', 1, 1, 2, 1, 'JN5678', NULL, 2, 3, 0),
    (5, 'cs-nyc1', 4, 1, NULL, 2, 'FDO9999', NULL, 2, NULL, 1);

INSERT INTO modules (id, device_id, name, serial) VALUES
    (1, 1, 'FPC 0', 'MOD-AAA'),
    (2, 1, 'FPC 1', 'MOD-AAB'),
    (3, 4, 'FPC 0', 'MOD-XYZ');

INSERT INTO console_server_ports (id, device_id, name) VALUES
    (1, 5, 'port1'),
    (2, 5, 'port2');

INSERT INTO console_ports (id, device_id, name, cs_port_id) VALUES
    (1, 1, 'con0', 1),
    (2, 4, 'con0', 2),
    (3, 2, 'con0', NULL);

INSERT INTO power_outlets (id, device_id, name) VALUES
    (1, 3, 'outlet1'),
    (2, 3, 'outlet2');

INSERT INTO power_ports (id, device_id, name, power_outlet_id) VALUES
    (1, 1, 'PSU0', 1),
    (2, 2, 'PSU0', 2),
    (3, 4, 'PSU0', NULL);

INSERT INTO interfaces (id, device_id, name, form_factor, mac_address, mgmt_only) VALUES
    (1, 1, 'xe-0/0/0', 1200, '00:11:22:33:44:55', 0),
    (2, 1, 'ae0', 200, NULL, 0),
    (3, 1, 'lo0', 0, NULL, 0),
    (4, 4, 'xe-0/0/0', 1200, '00:11:22:33:44:66', 0),
    (5, 2, 'Gi0/1', 1000, 'AA:BB:CC:DD:EE:01', 0),
    (6, 1, 'fxp0', 1000, '00:11:22:33:44:00', 1);

INSERT INTO interface_connections (id, interface_a_id, interface_b_id) VALUES
    (1, 1, 4),
    (2, 5, 6);

INSERT INTO custom_fields (id, name, label, field_type, obj_type, is_filterable) VALUES
    (1, 'contract', 'Support contract', 'text', 'device', 1),
    (2, 'tier', '', 'select', 'site', 1),
    (3, 'hidden', '', 'text', 'device', 0);

INSERT INTO custom_field_values (field_id, obj_type, obj_id, serialized_value) VALUES
    (1, 'device', 1, 'NBD-2024'),
    (1, 'device', 4, '4H-2025'),
    (2, 'site', 1, '3'),
    (2, 'site', 2, '4'),
    (3, 'device', 2, 'x');
"#;

/// In-memory pool with the schema applied and the seed inventory loaded
pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:").await.unwrap();
    sqlx::query(SCHEMA).execute(&pool).await.unwrap();
    sqlx::raw_sql(SEED).execute(&pool).await.unwrap();
    pool
}
