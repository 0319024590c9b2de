//! Generic filter kinds
//!
//! A [`FilterDef`] binds one request parameter to a predicate builder. Most
//! filters are declared as data (related-object lookups, flags, model field
//! equality); the rest point at a custom method.

use serde::Serialize;
use utoipa::ToSchema;

use super::params::QueryParams;
use super::types::{Condition, SqlValue};

/// Token selecting records whose relation is unset
pub const NULL_TOKEN: &str = "null";

/// One foreign-key step: `column` on the current table references `table.id`
#[derive(Debug, Clone, Copy)]
pub struct Hop {
    pub column: &'static str,
    pub table: &'static str,
}

pub const fn hop(column: &'static str, table: &'static str) -> Hop {
    Hop { column, table }
}

/// How values of a related-object lookup identify the related row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey {
    Id,
    Field(&'static str),
}

/// Value type of a model field compared for equality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Int,
    Bool,
}

#[derive(Debug, Clone, Copy)]
pub enum FilterKind {
    /// Comma-separated list of primary keys
    IdIn,
    /// Multi-valued related-object lookup along `path`
    Choice {
        path: &'static [Hop],
        key: LookupKey,
        nullable: bool,
    },
    /// Boolean flag on the row reached through `path`
    Boolean {
        path: &'static [Hop],
        column: &'static str,
    },
    /// Model field equality
    Exact {
        column: &'static str,
        ty: FieldType,
    },
    /// Custom predicate; receives the raw, non-empty value
    Method(fn(&str) -> Condition),
}

#[derive(Debug, Clone, Copy)]
pub struct FilterDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

/// Public description of a filter parameter
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterDescriptor {
    pub name: String,
    pub label: String,
    pub kind: &'static str,
    pub multiple: bool,
}

impl FilterDef {
    pub const fn new(name: &'static str, label: &'static str, kind: FilterKind) -> Self {
        Self { name, label, kind }
    }

    /// Build the predicate for this parameter; absent or blank values pass through
    pub fn apply(&self, params: &QueryParams) -> Condition {
        match self.kind {
            FilterKind::IdIn => match params.get(self.name) {
                Some(value) => id_in(value),
                None => Condition::Always,
            },
            FilterKind::Choice {
                path,
                key,
                nullable,
            } => choice(path, key, nullable, &params.get_all(self.name)),
            FilterKind::Boolean { path, column } => match params.get(self.name).and_then(parse_bool)
            {
                Some(flag) => through(path, Condition::eq(column, flag)),
                None => Condition::Always,
            },
            FilterKind::Exact { column, ty } => match params.get(self.name) {
                Some(value) if !value.trim().is_empty() => exact(column, ty, value),
                _ => Condition::Always,
            },
            FilterKind::Method(method) => match params.get(self.name) {
                Some(value) if !value.is_empty() => method(value),
                _ => Condition::Always,
            },
        }
    }

    pub fn describe(&self) -> FilterDescriptor {
        let (kind, multiple) = match self.kind {
            FilterKind::IdIn => ("id_list", true),
            FilterKind::Choice { .. } => ("choice", true),
            FilterKind::Boolean { .. } => ("boolean", false),
            FilterKind::Exact { ty, .. } => match ty {
                FieldType::Text => ("text", false),
                FieldType::Int => ("integer", false),
                FieldType::Bool => ("boolean", false),
            },
            FilterKind::Method(_) => ("text", false),
        };
        FilterDescriptor {
            name: self.name.to_string(),
            label: self.label.to_string(),
            kind,
            multiple,
        }
    }
}

/// Parse a boolean query value; `None` for anything unrecognised
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Wrap `condition` so it applies to the row reached by following `path`
pub fn through(path: &[Hop], condition: Condition) -> Condition {
    path.iter().rev().fold(condition, |inner, hop| {
        Condition::related(hop.column, hop.table, inner)
    })
}

fn id_in(value: &str) -> Condition {
    let mut ids = Vec::new();
    for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse::<i64>() {
            Ok(id) => ids.push(SqlValue::Int(id)),
            Err(_) => return Condition::Never,
        }
    }
    if ids.is_empty() {
        return Condition::Always;
    }
    Condition::In {
        column: "id",
        values: ids,
    }
}

fn choice(path: &'static [Hop], key: LookupKey, nullable: bool, raw: &[&str]) -> Condition {
    let Some((last, rest)) = path.split_last() else {
        return Condition::Always;
    };

    let mut include_null = false;
    let mut values = Vec::new();
    for value in raw {
        if nullable && *value == NULL_TOKEN {
            include_null = true;
            continue;
        }
        let value = match key {
            LookupKey::Id => match value.trim().parse::<i64>() {
                Ok(id) => SqlValue::Int(id),
                Err(_) => return Condition::Never,
            },
            LookupKey::Field(_) => SqlValue::from(*value),
        };
        if !values.contains(&value) {
            values.push(value);
        }
    }

    if values.is_empty() && !include_null {
        return Condition::Always;
    }

    // A value naming no related row voids the whole lookup
    let (guard, matched) = if values.is_empty() {
        (Condition::Always, Condition::Never)
    } else {
        let (column, inner) = match key {
            LookupKey::Id => (
                "id",
                Condition::In {
                    column: last.column,
                    values: values.clone(),
                },
            ),
            LookupKey::Field(field) => (
                field,
                Condition::related(
                    last.column,
                    last.table,
                    Condition::In {
                        column: field,
                        values: values.clone(),
                    },
                ),
            ),
        };
        let guard = Condition::AllExist {
            table: last.table,
            column,
            values,
        };
        (guard, through(rest, inner))
    };

    let selected = if include_null {
        Condition::any([matched, Condition::IsNull {
            column: path[0].column,
        }])
    } else {
        matched
    };
    Condition::all([guard, selected])
}

fn exact(column: &'static str, ty: FieldType, value: &str) -> Condition {
    match ty {
        FieldType::Text => Condition::eq(column, value.trim()),
        FieldType::Int => match value.trim().parse::<i64>() {
            Ok(n) => Condition::eq(column, n),
            Err(_) => Condition::Never,
        },
        FieldType::Bool => match parse_bool(value) {
            Some(flag) => Condition::eq(column, flag),
            None => Condition::Always,
        },
    }
}
