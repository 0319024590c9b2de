//! `cf_<name>` filters for user-defined custom fields

use super::fields::FilterDescriptor;
use super::params::QueryParams;
use super::types::Condition;
use crate::data::types::{CustomFieldRow, CustomFieldType};

/// Query parameter prefix for custom field filters
pub const CUSTOM_FIELD_PREFIX: &str = "cf_";

pub fn param_name(field: &CustomFieldRow) -> String {
    format!("{}{}", CUSTOM_FIELD_PREFIX, field.name)
}

/// Predicate for one custom field
///
/// Select fields take a choice ID; `0` selects records without a value for the
/// field. Other field types match the stored value by substring.
pub fn custom_field_condition(field: &CustomFieldRow, value: &str) -> Condition {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Condition::Always;
    }
    let has_value = |matching: Condition| {
        Condition::exists(
            "custom_field_values",
            "obj_id",
            Condition::all([
                Condition::eq("field_id", field.id),
                Condition::eq("obj_type", field.obj_type.as_str()),
                matching,
            ]),
        )
    };
    match field.field_type {
        CustomFieldType::Select => match trimmed.parse::<i64>() {
            Ok(0) => Condition::negate(has_value(Condition::Always)),
            Ok(choice) => has_value(Condition::eq("serialized_value", choice.to_string())),
            Err(_) => Condition::Never,
        },
        _ => has_value(Condition::contains("serialized_value", value)),
    }
}

/// Conjunction of every `cf_*` parameter present in `params`
pub fn apply(fields: &[CustomFieldRow], params: &QueryParams) -> Condition {
    Condition::all(fields.iter().map(|field| {
        match params.get(&param_name(field)) {
            Some(value) => custom_field_condition(field, value),
            None => Condition::Always,
        }
    }))
}

pub fn describe(field: &CustomFieldRow) -> FilterDescriptor {
    let label = if field.label.is_empty() {
        field.name.clone()
    } else {
        field.label.clone()
    };
    FilterDescriptor {
        name: param_name(field),
        label,
        kind: field.field_type.as_str(),
        multiple: false,
    }
}
