//! Record trait and value-map extraction.
//!
//! A [`Record`] is a typed struct mapped to a table through its
//! [`Schema`]. Writes extract a [`ValueMap`] of the fields the caller
//! explicitly set; reads rebuild the struct from an ordered result row.

use crate::error::{ExecutionError, Result};
use crate::schema::Schema;
use crate::value::Value;
use serde::Serialize;

/// Trait for types mapped to a database table.
///
/// `SCHEMA` carries the table name and declared field order.
/// `to_values` must emit only the fields that are explicitly set on the
/// instance: "unset" is distinct from "set to null", which is what makes
/// partial-field writes possible. `from_row` rebuilds an instance from an
/// ordered row; the backend contract is that column order matches the
/// declared field order exactly.
pub trait Record: Sized {
    /// Schema metadata for this record type.
    const SCHEMA: Schema;

    /// Extract the explicitly-set fields as a value map, in declared order.
    fn to_values(&self) -> ValueMap;

    /// Construct an instance from an ordered result row.
    fn from_row(row: Vec<Value>) -> Result<Self>;
}

/// An ordered field-name-to-value mapping for one record.
///
/// Entries keep the declared field order so batched executions bind
/// parameters consistently across records.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValueMap {
    entries: Vec<(&'static str, Value)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a field binding.
    pub fn push(&mut self, field: &'static str, value: impl Into<Value>) {
        self.entries.push((field, value.into()));
    }

    /// Builder-style variant of [`push`](Self::push).
    #[must_use]
    pub fn with(mut self, field: &'static str, value: impl Into<Value>) -> Self {
        self.push(field, value);
        self
    }

    /// Look up a bound value by field name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The bound field names, in order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    /// Iterate over (field, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(f, v)| (*f, v))
    }

    /// Keep only the bindings for the named fields.
    ///
    /// Used for delete key binding, where fields outside the key set are
    /// irrelevant to the statement.
    #[must_use]
    pub fn restricted_to(&self, fields: &[&str]) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(f, _)| fields.contains(f))
                .cloned()
                .collect(),
        }
    }
}

impl FromIterator<(&'static str, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Positional reader for one result row.
///
/// Wraps an ordered row and hands out values by field name, resolving the
/// name through the schema's declared order. Keeps the positional zip
/// contract in one place so `from_row` implementations stay by-name.
#[derive(Debug)]
pub struct RowValues {
    schema: Schema,
    row: Vec<Value>,
}

impl RowValues {
    /// Wrap a row, checking its width against the schema.
    pub fn new(schema: Schema, row: Vec<Value>) -> Result<Self> {
        if row.len() != schema.fields.len() {
            return Err(ExecutionError::new(format!(
                "row width {} does not match the {} declared fields of model {}",
                row.len(),
                schema.fields.len(),
                schema.model
            ))
            .into());
        }
        Ok(Self { schema, row })
    }

    /// Take the value for a declared field, leaving `Null` in its place.
    pub fn take(&mut self, field: &str) -> Result<Value> {
        let index = self
            .schema
            .fields
            .iter()
            .position(|f| *f == field)
            .ok_or_else(|| {
                ExecutionError::new(format!(
                    "field '{}' is not declared by model {}",
                    field, self.schema.model
                ))
            })?;
        Ok(std::mem::replace(&mut self.row[index], Value::Null))
    }
}
