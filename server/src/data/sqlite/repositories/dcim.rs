//! DCIM record repository
//!
//! Read-only listing of the record tables. The `WHERE` clause comes from a
//! filter set; this module adds ordering, paging and the total count.

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::data::filters::{Condition, ROOT_ALIAS, SqlParams, SqlValue};
use crate::data::sqlite::SqliteError;
use crate::data::types::{
    ConsolePortRow, ConsoleServerPortRow, CustomFieldRow, CustomFieldType, DeviceRow,
    DeviceTypeRow, FormFactor, InterfaceConnectionRow, InterfaceRow, PowerOutletRow, PowerPortRow,
    RackGroupRow, RackReservationRow, RackRow, SiteRow,
};

/// A row type listed from one record table
///
/// `COLUMNS` and `ORDER_BY` are qualified with [`ROOT_ALIAS`].
pub trait Record: Sized + Send + Unpin {
    type Tuple: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;

    const COLUMNS: &'static str;
    const ORDER_BY: &'static str;

    fn from_tuple(tuple: Self::Tuple) -> Self;
}

fn bind_values<'q, O>(
    mut query: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    values: &[SqlValue],
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>> {
    for value in values {
        query = match value {
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
            SqlValue::Bool(v) => query.bind(*v),
        };
    }
    query
}

/// List one page of `table` rows matching `condition`, with the total match count
pub async fn list_records<T: Record>(
    pool: &SqlitePool,
    table: &str,
    condition: &Condition,
    page: u32,
    limit: u32,
) -> Result<(Vec<T>, u64), SqliteError> {
    if condition.is_never() {
        tracing::debug!(%table, "Filter matches nothing, skipping query");
        return Ok((Vec::new(), 0));
    }

    let offset = (page.saturating_sub(1)) * limit;

    let mut params = SqlParams::default();
    let where_clause = if condition.is_always() {
        String::new()
    } else {
        format!(" WHERE {}", condition.to_sql(&mut params))
    };

    let sql = format!(
        "SELECT {} FROM {} {}{} ORDER BY {} LIMIT ? OFFSET ?",
        T::COLUMNS,
        table,
        ROOT_ALIAS,
        where_clause,
        T::ORDER_BY
    );
    tracing::trace!(%sql, params = ?params.values, "Listing records");

    let rows = bind_values(sqlx::query_as::<_, T::Tuple>(&sql), &params.values)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    let count_sql = format!(
        "SELECT COUNT(*) FROM {} {}{}",
        table, ROOT_ALIAS, where_clause
    );
    let total: (i64,) = bind_values(sqlx::query_as(&count_sql), &params.values)
        .fetch_one(pool)
        .await?;

    let records = rows.into_iter().map(T::from_tuple).collect();
    Ok((records, total.0 as u64))
}

/// Filterable custom fields registered for `obj_type`, ordered by name
pub async fn list_custom_fields(
    pool: &SqlitePool,
    obj_type: &str,
) -> Result<Vec<CustomFieldRow>, SqliteError> {
    let rows = sqlx::query_as::<_, (i64, String, String, String, String)>(
        "SELECT id, name, label, field_type, obj_type FROM custom_fields WHERE obj_type = ? AND is_filterable = 1 ORDER BY name",
    )
    .bind(obj_type)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, label, field_type, obj_type)| CustomFieldRow {
            id,
            name,
            label,
            field_type: CustomFieldType::from_db(&field_type),
            obj_type,
        })
        .collect())
}

// ============================================================================
// Sites and racks
// ============================================================================

impl Record for SiteRow {
    #[allow(clippy::type_complexity)]
    type Tuple = (
        i64,
        String,
        String,
        Option<i64>,
        Option<i64>,
        String,
        Option<i64>,
        String,
        String,
        String,
    );

    const COLUMNS: &'static str = "r.id, r.name, r.slug, r.region_id, r.tenant_id, r.facility, r.asn, r.physical_address, r.shipping_address, r.comments";
    const ORDER_BY: &'static str = "r.name, r.id";

    fn from_tuple(
        (
            id,
            name,
            slug,
            region_id,
            tenant_id,
            facility,
            asn,
            physical_address,
            shipping_address,
            comments,
        ): Self::Tuple,
    ) -> Self {
        Self {
            id,
            name,
            slug,
            region_id,
            tenant_id,
            facility,
            asn,
            physical_address,
            shipping_address,
            comments,
        }
    }
}

impl Record for RackGroupRow {
    type Tuple = (i64, String, String, i64);

    const COLUMNS: &'static str = "r.id, r.name, r.slug, r.site_id";
    const ORDER_BY: &'static str = "r.site_id, r.name, r.id";

    fn from_tuple((id, name, slug, site_id): Self::Tuple) -> Self {
        Self {
            id,
            name,
            slug,
            site_id,
        }
    }
}

impl Record for RackRow {
    #[allow(clippy::type_complexity)]
    type Tuple = (
        i64,
        String,
        Option<String>,
        i64,
        Option<i64>,
        Option<i64>,
        Option<i64>,
        i64,
        String,
    );

    const COLUMNS: &'static str = "r.id, r.name, r.facility_id, r.site_id, r.group_id, r.tenant_id, r.role_id, r.u_height, r.comments";
    const ORDER_BY: &'static str = "r.site_id, r.name, r.id";

    fn from_tuple(
        (id, name, facility_id, site_id, group_id, tenant_id, role_id, u_height, comments): Self::Tuple,
    ) -> Self {
        Self {
            id,
            name,
            facility_id,
            site_id,
            group_id,
            tenant_id,
            role_id,
            u_height,
            comments,
        }
    }
}

impl Record for RackReservationRow {
    type Tuple = (i64, i64, i64, String);

    const COLUMNS: &'static str = "r.id, r.rack_id, r.user_id, r.description";
    const ORDER_BY: &'static str = "r.rack_id, r.id";

    fn from_tuple((id, rack_id, user_id, description): Self::Tuple) -> Self {
        Self {
            id,
            rack_id,
            user_id,
            description,
        }
    }
}

// ============================================================================
// Device types and devices
// ============================================================================

impl Record for DeviceTypeRow {
    #[allow(clippy::type_complexity)]
    type Tuple = (
        i64,
        i64,
        String,
        String,
        String,
        i64,
        bool,
        bool,
        bool,
        Option<bool>,
        String,
    );

    const COLUMNS: &'static str = "r.id, r.manufacturer_id, r.model, r.slug, r.part_number, r.u_height, r.is_console_server, r.is_pdu, r.is_network_device, r.subdevice_role, r.comments";
    const ORDER_BY: &'static str = "r.manufacturer_id, r.model, r.id";

    fn from_tuple(
        (
            id,
            manufacturer_id,
            model,
            slug,
            part_number,
            u_height,
            is_console_server,
            is_pdu,
            is_network_device,
            subdevice_role,
            comments,
        ): Self::Tuple,
    ) -> Self {
        Self {
            id,
            manufacturer_id,
            model,
            slug,
            part_number,
            u_height,
            is_console_server,
            is_pdu,
            is_network_device,
            subdevice_role,
            comments,
        }
    }
}

impl Record for DeviceRow {
    #[allow(clippy::type_complexity)]
    type Tuple = (
        i64,
        Option<String>,
        i64,
        i64,
        Option<i64>,
        Option<i64>,
        String,
        Option<String>,
        i64,
        Option<i64>,
        bool,
        String,
    );

    const COLUMNS: &'static str = "r.id, r.name, r.device_type_id, r.device_role_id, r.tenant_id, r.platform_id, r.serial, r.asset_tag, r.site_id, r.rack_id, r.status, r.comments";
    const ORDER_BY: &'static str = "r.name, r.id";

    fn from_tuple(
        (
            id,
            name,
            device_type_id,
            device_role_id,
            tenant_id,
            platform_id,
            serial,
            asset_tag,
            site_id,
            rack_id,
            status,
            comments,
        ): Self::Tuple,
    ) -> Self {
        Self {
            id,
            name,
            device_type_id,
            device_role_id,
            tenant_id,
            platform_id,
            serial,
            asset_tag,
            site_id,
            rack_id,
            status,
            comments,
        }
    }
}

// ============================================================================
// Components and connections
// ============================================================================

const COMPONENT_ORDER: &str = "r.device_id, r.name, r.id";

impl Record for ConsolePortRow {
    type Tuple = (i64, i64, String, Option<i64>, bool);

    const COLUMNS: &'static str = "r.id, r.device_id, r.name, r.cs_port_id, r.connection_status";
    const ORDER_BY: &'static str = COMPONENT_ORDER;

    fn from_tuple((id, device_id, name, cs_port_id, connection_status): Self::Tuple) -> Self {
        Self {
            id,
            device_id,
            name,
            cs_port_id,
            connection_status,
        }
    }
}

impl Record for ConsoleServerPortRow {
    type Tuple = (i64, i64, String);

    const COLUMNS: &'static str = "r.id, r.device_id, r.name";
    const ORDER_BY: &'static str = COMPONENT_ORDER;

    fn from_tuple((id, device_id, name): Self::Tuple) -> Self {
        Self {
            id,
            device_id,
            name,
        }
    }
}

impl Record for PowerPortRow {
    type Tuple = (i64, i64, String, Option<i64>, bool);

    const COLUMNS: &'static str =
        "r.id, r.device_id, r.name, r.power_outlet_id, r.connection_status";
    const ORDER_BY: &'static str = COMPONENT_ORDER;

    fn from_tuple((id, device_id, name, power_outlet_id, connection_status): Self::Tuple) -> Self {
        Self {
            id,
            device_id,
            name,
            power_outlet_id,
            connection_status,
        }
    }
}

impl Record for PowerOutletRow {
    type Tuple = (i64, i64, String);

    const COLUMNS: &'static str = "r.id, r.device_id, r.name";
    const ORDER_BY: &'static str = COMPONENT_ORDER;

    fn from_tuple((id, device_id, name): Self::Tuple) -> Self {
        Self {
            id,
            device_id,
            name,
        }
    }
}

impl Record for InterfaceRow {
    type Tuple = (i64, i64, String, i64, Option<String>, bool, String);

    const COLUMNS: &'static str =
        "r.id, r.device_id, r.name, r.form_factor, r.mac_address, r.mgmt_only, r.description";
    const ORDER_BY: &'static str = COMPONENT_ORDER;

    fn from_tuple(
        (id, device_id, name, form_factor, mac_address, mgmt_only, description): Self::Tuple,
    ) -> Self {
        Self {
            id,
            device_id,
            name,
            form_factor,
            form_factor_label: FormFactor::from_code(form_factor).map(|ff| ff.label().to_string()),
            mac_address,
            mgmt_only,
            description,
        }
    }
}

impl Record for InterfaceConnectionRow {
    type Tuple = (i64, i64, i64, bool);

    const COLUMNS: &'static str =
        "r.id, r.interface_a_id, r.interface_b_id, r.connection_status";
    const ORDER_BY: &'static str = "r.id";

    fn from_tuple((id, interface_a_id, interface_b_id, connection_status): Self::Tuple) -> Self {
        Self {
            id,
            interface_a_id,
            interface_b_id,
            connection_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::{FilterSet, QueryParams, sets};
    use crate::data::sqlite::repositories::fixtures::setup_test_pool;

    async fn filter<T: Record>(
        pool: &SqlitePool,
        set: &FilterSet,
        pairs: &[(&str, &str)],
    ) -> (Vec<T>, u64) {
        let params: QueryParams = pairs.iter().copied().collect();
        let custom_fields = match set.custom_fields {
            Some(obj_type) => list_custom_fields(pool, obj_type).await.unwrap(),
            None => Vec::new(),
        };
        let condition = set.apply(&params, &custom_fields);
        list_records::<T>(pool, set.table, &condition, 1, 100)
            .await
            .unwrap()
    }

    async fn site_slugs(pool: &SqlitePool, pairs: &[(&str, &str)]) -> Vec<String> {
        let (rows, _) = filter::<SiteRow>(pool, &sets::SITES, pairs).await;
        rows.into_iter().map(|s| s.slug).collect()
    }

    async fn device_names(pool: &SqlitePool, pairs: &[(&str, &str)]) -> Vec<String> {
        let (rows, _) = filter::<DeviceRow>(pool, &sets::DEVICES, pairs).await;
        rows.into_iter().filter_map(|d| d.name).collect()
    }

    #[tokio::test]
    async fn test_list_sites_unfiltered_ordered_by_name() {
        let pool = setup_test_pool().await;
        let (rows, total) = filter::<SiteRow>(&pool, &sets::SITES, &[]).await;

        assert_eq!(total, 3);
        let names: Vec<&str> = rows.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["AMS1", "LAB", "NYC1"]);
    }

    #[tokio::test]
    async fn test_site_region_slug_and_null() {
        let pool = setup_test_pool().await;

        assert_eq!(site_slugs(&pool, &[("region", "europe")]).await, vec!["ams1"]);
        assert_eq!(site_slugs(&pool, &[("region", "null")]).await, vec!["lab"]);
        assert_eq!(
            site_slugs(&pool, &[("region", "europe"), ("region", "null")]).await,
            vec!["ams1", "lab"]
        );
        assert!(site_slugs(&pool, &[("region", "antarctica")]).await.is_empty());
    }

    #[tokio::test]
    async fn test_site_id_and_slug_lookups_agree() {
        let pool = setup_test_pool().await;
        assert_eq!(
            site_slugs(&pool, &[("tenant_id", "1")]).await,
            site_slugs(&pool, &[("tenant", "acme")]).await
        );
    }

    #[tokio::test]
    async fn test_unknown_related_value_empties_the_lookup() {
        let pool = setup_test_pool().await;

        assert!(
            device_names(&pool, &[("site", "ams1"), ("site", "nowhere")])
                .await
                .is_empty()
        );
        assert!(
            device_names(&pool, &[("site_id", "1"), ("site_id", "999")])
                .await
                .is_empty()
        );
        assert!(
            site_slugs(&pool, &[("region", "null"), ("region", "antarctica")])
                .await
                .is_empty()
        );
        // Repeated values are counted once
        assert_eq!(
            device_names(&pool, &[("site", "ams1"), ("site", "ams1")]).await,
            vec!["edge-ams1", "pdu-ams1", "sw-ams1"]
        );
        assert_eq!(
            device_names(&pool, &[("site_id", "1"), ("site_id", "2")]).await.len(),
            5
        );
    }

    #[tokio::test]
    async fn test_text_filters_are_trimmed() {
        let pool = setup_test_pool().await;

        assert_eq!(
            device_names(&pool, &[("q", " edge")]).await,
            vec!["edge-ams1", "edge-nyc1"]
        );
        assert_eq!(
            device_names(&pool, &[("name", " edge-ams1 ")]).await,
            vec!["edge-ams1"]
        );
        assert_eq!(site_slugs(&pool, &[("q", "equinix  ")]).await, vec!["ams1"]);
    }

    #[tokio::test]
    async fn test_site_search() {
        let pool = setup_test_pool().await;

        assert_eq!(site_slugs(&pool, &[("q", "equinix")]).await, vec!["ams1"]);
        assert_eq!(site_slugs(&pool, &[("q", "65002")]).await, vec!["nyc1"]);
        assert_eq!(site_slugs(&pool, &[("q", "")]).await.len(), 3);
        assert_eq!(site_slugs(&pool, &[("q", "   ")]).await.len(), 3);
    }

    #[tokio::test]
    async fn test_site_custom_field_select() {
        let pool = setup_test_pool().await;

        assert_eq!(site_slugs(&pool, &[("cf_tier", "3")]).await, vec!["ams1"]);
        assert_eq!(site_slugs(&pool, &[("cf_tier", "0")]).await, vec!["lab"]);
        assert!(site_slugs(&pool, &[("cf_tier", "gold")]).await.is_empty());
    }

    #[tokio::test]
    async fn test_device_search_does_not_duplicate_on_modules() {
        let pool = setup_test_pool().await;

        let (rows, total) = filter::<DeviceRow>(&pool, &sets::DEVICES, &[("q", "MOD-AA")]).await;
        assert_eq!(total, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name.as_deref(), Some("edge-ams1"));
    }

    #[tokio::test]
    async fn test_device_search_asset_tag_is_exact_and_trimmed() {
        let pool = setup_test_pool().await;

        assert_eq!(device_names(&pool, &[("q", " A-0002 ")]).await, vec!["sw-ams1"]);
        assert!(device_names(&pool, &[("q", "A-000")]).await.is_empty());
    }

    #[tokio::test]
    async fn test_device_mac_address() {
        let pool = setup_test_pool().await;

        assert_eq!(
            device_names(&pool, &[("mac_address", "00-11-22-33-44-55")]).await,
            vec!["edge-ams1"]
        );
        assert_eq!(
            device_names(&pool, &[("mac_address", "aabb.ccdd.ee01")]).await,
            vec!["sw-ams1"]
        );
        let (rows, total) =
            filter::<DeviceRow>(&pool, &sets::DEVICES, &[("mac_address", "zz:zz")]).await;
        assert!(rows.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_device_related_filters() {
        let pool = setup_test_pool().await;

        assert_eq!(
            device_names(&pool, &[("manufacturer", "juniper")]).await,
            vec!["edge-ams1", "edge-nyc1"]
        );
        assert_eq!(
            device_names(&pool, &[("rack_group_id", "1")]).await,
            vec!["edge-ams1", "pdu-ams1"]
        );
        assert_eq!(device_names(&pool, &[("rack_id", "null")]).await, vec!["cs-nyc1"]);
        assert_eq!(
            device_names(&pool, &[("site", "nyc1"), ("role", "router")]).await,
            vec!["cs-nyc1", "edge-nyc1"]
        );
    }

    #[tokio::test]
    async fn test_device_boolean_filters() {
        let pool = setup_test_pool().await;

        assert_eq!(device_names(&pool, &[("is_pdu", "true")]).await, vec!["pdu-ams1"]);
        assert_eq!(device_names(&pool, &[("status", "false")]).await, vec!["edge-nyc1"]);
        assert_eq!(
            device_names(&pool, &[("is_console_server", "1")]).await,
            vec!["cs-nyc1"]
        );
        // Unrecognised boolean passes through
        assert_eq!(device_names(&pool, &[("is_pdu", "maybe")]).await.len(), 5);
    }

    #[tokio::test]
    async fn test_device_custom_field_text() {
        let pool = setup_test_pool().await;

        assert_eq!(
            device_names(&pool, &[("cf_contract", "nbd")]).await,
            vec!["edge-ams1"]
        );
        // Non-filterable fields are not exposed as parameters
        assert_eq!(device_names(&pool, &[("cf_hidden", "x")]).await.len(), 5);
    }

    #[tokio::test]
    async fn test_device_pagination() {
        let pool = setup_test_pool().await;
        let condition = sets::DEVICES.apply(&QueryParams::default(), &[]);

        let (rows, total) = list_records::<DeviceRow>(&pool, "devices", &condition, 2, 2)
            .await
            .unwrap();

        assert_eq!(total, 5);
        let names: Vec<_> = rows.iter().filter_map(|d| d.name.as_deref()).collect();
        assert_eq!(names, vec!["edge-nyc1", "pdu-ams1"]);
    }

    #[tokio::test]
    async fn test_interface_type_filter() {
        let pool = setup_test_pool().await;
        let names = |rows: Vec<InterfaceRow>| -> Vec<String> {
            rows.into_iter().map(|i| i.name).collect()
        };

        let (lag, _) = filter::<InterfaceRow>(&pool, &sets::INTERFACES, &[("type", "lag")]).await;
        assert_eq!(names(lag), vec!["ae0"]);

        let (virt, _) =
            filter::<InterfaceRow>(&pool, &sets::INTERFACES, &[("type", "virtual")]).await;
        assert_eq!(names(virt), vec!["ae0", "lo0"]);

        let (physical, total) =
            filter::<InterfaceRow>(&pool, &sets::INTERFACES, &[("type", "physical")]).await;
        assert_eq!(total, 4);
        assert!(physical.iter().all(|i| i.form_factor != 0 && i.form_factor != 200));

        let (unknown, _) =
            filter::<InterfaceRow>(&pool, &sets::INTERFACES, &[("type", "optical")]).await;
        assert_eq!(unknown.len(), 6);
    }

    #[tokio::test]
    async fn test_interface_form_factor_label() {
        let pool = setup_test_pool().await;
        let (rows, _) =
            filter::<InterfaceRow>(&pool, &sets::INTERFACES, &[("device", "edge-ams1")]).await;

        let ae0 = rows.iter().find(|i| i.name == "ae0").unwrap();
        assert_eq!(
            ae0.form_factor_label.as_deref(),
            Some("Link Aggregation Group (LAG)")
        );
    }

    #[tokio::test]
    async fn test_console_connections() {
        let pool = setup_test_pool().await;

        let (all, total) =
            filter::<ConsolePortRow>(&pool, &sets::CONSOLE_CONNECTIONS, &[]).await;
        assert_eq!(total, 2);
        assert!(all.iter().all(|p| p.cs_port_id.is_some()));

        let (nyc, _) =
            filter::<ConsolePortRow>(&pool, &sets::CONSOLE_CONNECTIONS, &[("site", "nyc1")])
                .await;
        assert_eq!(nyc.len(), 2);

        let (ams, _) =
            filter::<ConsolePortRow>(&pool, &sets::CONSOLE_CONNECTIONS, &[("site", "ams1")])
                .await;
        assert!(ams.is_empty());
    }

    #[tokio::test]
    async fn test_power_connections() {
        let pool = setup_test_pool().await;

        let (ams, total) =
            filter::<PowerPortRow>(&pool, &sets::POWER_CONNECTIONS, &[("site", "ams1")]).await;
        assert_eq!(total, 2);
        assert!(ams.iter().all(|p| p.power_outlet_id.is_some()));
    }

    #[tokio::test]
    async fn test_interface_connections_match_either_end() {
        let pool = setup_test_pool().await;

        let (nyc, _) = filter::<InterfaceConnectionRow>(
            &pool,
            &sets::INTERFACE_CONNECTIONS,
            &[("site", "nyc1")],
        )
        .await;
        assert_eq!(nyc.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);

        let (ams, _) = filter::<InterfaceConnectionRow>(
            &pool,
            &sets::INTERFACE_CONNECTIONS,
            &[("site", "ams1")],
        )
        .await;
        assert_eq!(ams.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_rack_reservations_by_user() {
        let pool = setup_test_pool().await;

        let (rows, _) =
            filter::<RackReservationRow>(&pool, &sets::RACK_RESERVATIONS, &[("user", "2")]).await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].rack_id, 3);

        let (none, _) =
            filter::<RackReservationRow>(&pool, &sets::RACK_RESERVATIONS, &[("user", "bob")])
                .await;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_racks_and_groups() {
        let pool = setup_test_pool().await;

        let (racks, _) = filter::<RackRow>(&pool, &sets::RACKS, &[("group", "null")]).await;
        assert_eq!(racks.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), vec!["R102"]);

        let (groups, _) =
            filter::<RackGroupRow>(&pool, &sets::RACK_GROUPS, &[("site", "nyc1")]).await;
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].slug, "row-1");
    }

    #[tokio::test]
    async fn test_device_types_filters() {
        let pool = setup_test_pool().await;

        let (rows, _) =
            filter::<DeviceTypeRow>(&pool, &sets::DEVICE_TYPES, &[("q", "juniper")]).await;
        assert_eq!(rows.iter().map(|t| t.slug.as_str()).collect::<Vec<_>>(), vec!["mx480"]);

        let (parents, _) = filter::<DeviceTypeRow>(
            &pool,
            &sets::DEVICE_TYPES,
            &[("subdevice_role", "true")],
        )
        .await;
        assert_eq!(parents.len(), 1);
        assert_eq!(parents[0].subdevice_role, Some(true));
    }

    #[tokio::test]
    async fn test_component_lookup_by_device_name() {
        let pool = setup_test_pool().await;

        let (outlets, _) =
            filter::<PowerOutletRow>(&pool, &sets::POWER_OUTLETS, &[("device", "pdu-ams1")])
                .await;
        assert_eq!(outlets.len(), 2);

        let (ports, _) = filter::<ConsoleServerPortRow>(
            &pool,
            &sets::CONSOLE_SERVER_PORTS,
            &[("device_id", "5"), ("name", "port2")],
        )
        .await;
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].id, 2);
    }

    #[tokio::test]
    async fn test_never_condition_skips_query() {
        let pool = setup_test_pool().await;
        let (rows, total) = list_records::<SiteRow>(&pool, "sites", &Condition::Never, 1, 50)
            .await
            .unwrap();
        assert!(rows.is_empty());
        assert_eq!(total, 0);
    }

    #[tokio::test]
    async fn test_list_custom_fields_only_filterable() {
        let pool = setup_test_pool().await;

        let fields = list_custom_fields(&pool, "device").await.unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "contract");
        assert_eq!(fields[0].field_type, CustomFieldType::Text);

        let site_fields = list_custom_fields(&pool, "site").await.unwrap();
        assert_eq!(site_fields[0].field_type, CustomFieldType::Select);
        assert!(list_custom_fields(&pool, "rack").await.unwrap().is_empty());
    }
}
