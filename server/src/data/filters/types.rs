//! Predicate tree and SQL generation
//!
//! A filter set reduces request parameters to a single [`Condition`]. The
//! condition renders to a SQL `WHERE` fragment with `?` placeholders while the
//! bound values are collected in [`SqlParams`] (insertion order).

use crate::utils::sql::escape_like_pattern;

/// Alias of the table a filter set is scoped to
pub const ROOT_ALIAS: &str = "r";

/// A bound SQL value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Text(String),
    Bool(bool),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Collects SQL parameters during query building (maintains insertion order)
#[derive(Debug, Default)]
pub struct SqlParams {
    pub values: Vec<SqlValue>,
    aliases: usize,
}

impl SqlParams {
    fn bind(&mut self, value: SqlValue) -> &'static str {
        self.values.push(value);
        "?"
    }

    /// Unique alias for a sub-select
    fn next_alias(&mut self) -> String {
        self.aliases += 1;
        format!("t{}", self.aliases)
    }
}

/// Predicate over the records of one table
///
/// Column names are unqualified; they are resolved against the alias of the
/// table the condition is rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Pass-through
    Always,
    /// Empty result
    Never,
    Eq {
        column: &'static str,
        value: SqlValue,
    },
    In {
        column: &'static str,
        values: Vec<SqlValue>,
    },
    IsNull {
        column: &'static str,
    },
    NotNull {
        column: &'static str,
    },
    /// Case-insensitive substring match
    Contains {
        column: &'static str,
        value: String,
    },
    /// Foreign key pointing at a row of `table` that satisfies `condition`
    Related {
        column: &'static str,
        table: &'static str,
        condition: Box<Condition>,
    },
    /// At least one row of `table` whose `fk` references this row satisfies `condition`
    Exists {
        table: &'static str,
        fk: &'static str,
        condition: Box<Condition>,
    },
    /// Every distinct value names a row of `table` by `column`; uncorrelated
    AllExist {
        table: &'static str,
        column: &'static str,
        values: Vec<SqlValue>,
    },
    Not(Box<Condition>),
    Any(Vec<Condition>),
    All(Vec<Condition>),
}

impl Condition {
    pub fn eq(column: &'static str, value: impl Into<SqlValue>) -> Self {
        Self::Eq {
            column,
            value: value.into(),
        }
    }

    pub fn contains(column: &'static str, value: impl Into<String>) -> Self {
        Self::Contains {
            column,
            value: value.into(),
        }
    }

    pub fn related(column: &'static str, table: &'static str, condition: Condition) -> Self {
        Self::Related {
            column,
            table,
            condition: Box::new(condition),
        }
    }

    pub fn exists(table: &'static str, fk: &'static str, condition: Condition) -> Self {
        Self::Exists {
            table,
            fk,
            condition: Box::new(condition),
        }
    }

    pub fn negate(condition: Condition) -> Self {
        match condition {
            Self::Always => Self::Never,
            Self::Never => Self::Always,
            other => Self::Not(Box::new(other)),
        }
    }

    /// Conjunction; `Always` terms are dropped and any `Never` term wins
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        let mut terms = Vec::new();
        for condition in conditions {
            match condition {
                Self::Always => {}
                Self::Never => return Self::Never,
                Self::All(nested) => terms.extend(nested),
                other => terms.push(other),
            }
        }
        match terms.len() {
            0 => Self::Always,
            1 => terms.remove(0),
            _ => Self::All(terms),
        }
    }

    /// Disjunction; `Never` terms are dropped and any `Always` term wins
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        let mut terms = Vec::new();
        for condition in conditions {
            match condition {
                Self::Never => {}
                Self::Always => return Self::Always,
                Self::Any(nested) => terms.extend(nested),
                other => terms.push(other),
            }
        }
        match terms.len() {
            0 => Self::Never,
            1 => terms.remove(0),
            _ => Self::Any(terms),
        }
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Self::Always)
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }

    /// Generate SQL WHERE clause fragment for the root table
    pub fn to_sql(&self, params: &mut SqlParams) -> String {
        self.to_sql_aliased(ROOT_ALIAS, params)
    }

    /// Generate SQL WHERE clause fragment with columns qualified by `alias`
    ///
    /// Returns the SQL clause with ? placeholders and updates params.
    pub fn to_sql_aliased(&self, alias: &str, params: &mut SqlParams) -> String {
        match self {
            Self::Always => "1=1".to_string(),
            Self::Never => "1=0".to_string(),
            Self::Eq { column, value } => {
                format!("{}.{} = {}", alias, column, params.bind(value.clone()))
            }
            Self::In { column, values } => {
                if values.is_empty() {
                    return "1=0".to_string();
                }
                let placeholders: Vec<&str> =
                    values.iter().map(|v| params.bind(v.clone())).collect();
                format!("{}.{} IN ({})", alias, column, placeholders.join(", "))
            }
            Self::IsNull { column } => format!("{}.{} IS NULL", alias, column),
            Self::NotNull { column } => format!("{}.{} IS NOT NULL", alias, column),
            Self::Contains { column, value } => {
                // SQLite LIKE folds ASCII case
                let pattern = format!("%{}%", escape_like_pattern(value));
                format!(
                    "{}.{} LIKE {} ESCAPE '\\'",
                    alias,
                    column,
                    params.bind(SqlValue::Text(pattern))
                )
            }
            Self::Related {
                column,
                table,
                condition,
            } => {
                let sub = params.next_alias();
                let inner = condition.to_sql_aliased(&sub, params);
                format!(
                    "{}.{} IN (SELECT {}.id FROM {} {} WHERE {})",
                    alias, column, sub, table, sub, inner
                )
            }
            Self::Exists {
                table,
                fk,
                condition,
            } => {
                let sub = params.next_alias();
                let inner = condition.to_sql_aliased(&sub, params);
                format!(
                    "EXISTS (SELECT 1 FROM {} {} WHERE {}.{} = {}.id AND {})",
                    table, sub, sub, fk, alias, inner
                )
            }
            Self::AllExist {
                table,
                column,
                values,
            } => {
                if values.is_empty() {
                    return "1=1".to_string();
                }
                let sub = params.next_alias();
                let placeholders: Vec<&str> =
                    values.iter().map(|v| params.bind(v.clone())).collect();
                format!(
                    "(SELECT COUNT(DISTINCT {}.{}) FROM {} {} WHERE {}.{} IN ({})) = {}",
                    sub,
                    column,
                    table,
                    sub,
                    sub,
                    column,
                    placeholders.join(", "),
                    values.len()
                )
            }
            Self::Not(condition) => {
                format!("NOT ({})", condition.to_sql_aliased(alias, params))
            }
            Self::Any(terms) => {
                if terms.is_empty() {
                    return "1=0".to_string();
                }
                let parts: Vec<String> = terms
                    .iter()
                    .map(|t| t.to_sql_aliased(alias, params))
                    .collect();
                format!("({})", parts.join(" OR "))
            }
            Self::All(terms) => {
                if terms.is_empty() {
                    return "1=1".to_string();
                }
                let parts: Vec<String> = terms
                    .iter()
                    .map(|t| t.to_sql_aliased(alias, params))
                    .collect();
                format!("({})", parts.join(" AND "))
            }
        }
    }
}
