//! DCIM API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::types::{default_limit, default_page, validate_limit, validate_page};
use crate::data::filters::FilterDescriptor;

/// Pagination params shared by every listing; filter params are read separately
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    #[validate(custom(function = "validate_page"))]
    pub page: u32,

    #[serde(default = "default_limit")]
    #[validate(custom(function = "validate_limit"))]
    pub limit: u32,
}

/// Filter parameters accepted by one resource
#[derive(Debug, Serialize, ToSchema)]
pub struct FiltersResponse {
    pub resource: String,
    pub filters: Vec<FilterDescriptor>,
}
