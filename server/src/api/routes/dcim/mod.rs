//! DCIM API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use sqlx::SqlitePool;

use crate::api::extractors::{FilterQuery, ValidatedQuery};
use crate::api::types::{ApiError, PaginatedResponse};
use crate::data::SqliteService;
use crate::data::filters::{Condition, FilterSet, sets};
use crate::data::sqlite::repositories::{Record, list_custom_fields, list_records};
use crate::data::types::{
    ConsolePortRow, ConsoleServerPortRow, CustomFieldRow, DeviceRow, DeviceTypeRow,
    InterfaceConnectionRow, InterfaceRow, PowerOutletRow, PowerPortRow, RackGroupRow,
    RackReservationRow, RackRow, SiteRow,
};

use types::{FiltersResponse, ListQuery};

/// Shared state for DCIM API endpoints
#[derive(Clone)]
pub struct DcimApiState {
    pub database: Arc<SqliteService>,
}

/// Build DCIM API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = DcimApiState { database };

    Router::new()
        .route("/{resource}", get(list_resource))
        .route("/{resource}/filters", get(list_filters))
        .with_state(state)
}

fn find_set(resource: &str) -> Result<&'static FilterSet, ApiError> {
    sets::find(resource).ok_or_else(|| {
        ApiError::not_found(
            "UNKNOWN_RESOURCE",
            format!("Unknown resource: {}", resource),
        )
    })
}

async fn custom_fields_for(
    pool: &SqlitePool,
    set: &FilterSet,
) -> Result<Vec<CustomFieldRow>, ApiError> {
    match set.custom_fields {
        Some(obj_type) => list_custom_fields(pool, obj_type)
            .await
            .map_err(ApiError::from_sqlite),
        None => Ok(Vec::new()),
    }
}

async fn page_of<T: Record + serde::Serialize>(
    pool: &SqlitePool,
    set: &FilterSet,
    condition: &Condition,
    query: &ListQuery,
) -> Result<Response, ApiError> {
    let (records, total) = list_records::<T>(pool, set.table, condition, query.page, query.limit)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(PaginatedResponse::new(records, query.page, query.limit, total)).into_response())
}

/// List records of one resource narrowed by its query filters
#[utoipa::path(
    get,
    path = "/api/v1/dcim/{resource}",
    tag = "dcim",
    params(
        ("resource" = String, Path, description = "Resource name, e.g. devices or console-connections"),
        ("page" = Option<u32>, Query, description = "Page number (1-100)"),
        ("limit" = Option<u32>, Query, description = "Items per page (1-500)")
    ),
    responses(
        (status = 200, description = "Matching records with pagination metadata"),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 404, description = "Unknown resource")
    )
)]
pub async fn list_resource(
    State(state): State<DcimApiState>,
    Path(resource): Path<String>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
    FilterQuery(params): FilterQuery,
) -> Result<Response, ApiError> {
    let set = find_set(&resource)?;
    let pool = state.database.pool();

    let custom_fields = custom_fields_for(pool, set).await?;
    let condition = set.apply(&params, &custom_fields);
    tracing::debug!(resource = set.resource, ?condition, "Listing resource");

    match set.resource {
        "sites" => page_of::<SiteRow>(pool, set, &condition, &query).await,
        "rack-groups" => page_of::<RackGroupRow>(pool, set, &condition, &query).await,
        "racks" => page_of::<RackRow>(pool, set, &condition, &query).await,
        "rack-reservations" => page_of::<RackReservationRow>(pool, set, &condition, &query).await,
        "device-types" => page_of::<DeviceTypeRow>(pool, set, &condition, &query).await,
        "devices" => page_of::<DeviceRow>(pool, set, &condition, &query).await,
        "console-ports" | "console-connections" => {
            page_of::<ConsolePortRow>(pool, set, &condition, &query).await
        }
        "console-server-ports" => {
            page_of::<ConsoleServerPortRow>(pool, set, &condition, &query).await
        }
        "power-ports" | "power-connections" => {
            page_of::<PowerPortRow>(pool, set, &condition, &query).await
        }
        "power-outlets" => page_of::<PowerOutletRow>(pool, set, &condition, &query).await,
        "interfaces" => page_of::<InterfaceRow>(pool, set, &condition, &query).await,
        "interface-connections" => {
            page_of::<InterfaceConnectionRow>(pool, set, &condition, &query).await
        }
        other => Err(ApiError::not_found(
            "UNKNOWN_RESOURCE",
            format!("Unknown resource: {}", other),
        )),
    }
}

/// Describe the filter parameters a resource accepts
#[utoipa::path(
    get,
    path = "/api/v1/dcim/{resource}/filters",
    tag = "dcim",
    params(
        ("resource" = String, Path, description = "Resource name")
    ),
    responses(
        (status = 200, description = "Accepted filter parameters", body = FiltersResponse),
        (status = 404, description = "Unknown resource")
    )
)]
pub async fn list_filters(
    State(state): State<DcimApiState>,
    Path(resource): Path<String>,
) -> Result<Json<FiltersResponse>, ApiError> {
    let set = find_set(&resource)?;
    let custom_fields = custom_fields_for(state.database.pool(), set).await?;

    Ok(Json(FiltersResponse {
        resource: set.resource.to_string(),
        filters: set.describe(&custom_fields),
    }))
}
