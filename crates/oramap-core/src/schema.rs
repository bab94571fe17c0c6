//! Schema metadata for record types.
//!
//! A [`Schema`] is an explicit description of the table a record type maps
//! to: the table name plus the ordered list of declared field names. It is
//! attached to each model as an associated constant rather than discovered
//! through runtime reflection, so query generation is driven entirely by
//! compile-time metadata.

use crate::error::{Result, SchemaError, ValidationError};

/// Per-model table metadata.
///
/// Field order is significant: generated column lists, SET clauses, and
/// WHERE conditions always follow the declared order, and result rows are
/// zipped back onto fields positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// The Rust model name, used in error messages.
    pub model: &'static str,
    /// The table name. A schema without one is invalid for any query
    /// generation and fails fast.
    pub table: Option<&'static str>,
    /// Ordered, distinct field names.
    pub fields: &'static [&'static str],
}

impl Schema {
    /// Create schema metadata for a model.
    pub const fn new(
        model: &'static str,
        table: Option<&'static str>,
        fields: &'static [&'static str],
    ) -> Self {
        Self {
            model,
            table,
            fields,
        }
    }

    /// Get the table name, failing fast when the schema lacks one.
    pub fn table(&self) -> Result<&'static str> {
        self.table
            .ok_or_else(|| SchemaError::missing_table(self.model).into())
    }

    /// Check whether a field is declared by this schema.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|f| *f == field)
    }

    /// Validate a key-field set: non-empty, every element declared.
    ///
    /// The error for an undeclared element names both the field and the
    /// model.
    pub fn require_using(&self, using: &[&str]) -> Result<()> {
        if using.is_empty() {
            return Err(ValidationError::empty_using().into());
        }
        for field in using {
            if !self.contains(field) {
                return Err(ValidationError::unknown_field(field, self.model).into());
            }
        }
        Ok(())
    }

    /// Project `using` onto the declared field order.
    ///
    /// Output order follows the schema, never the input order, keeping
    /// generated SQL deterministic.
    pub fn ordered_subset(&self, using: &[&str]) -> Vec<&'static str> {
        self.fields
            .iter()
            .copied()
            .filter(|f| using.contains(f))
            .collect()
    }

    /// The declared fields not present in `using`, in declared order.
    pub fn ordered_complement(&self, using: &[&str]) -> Vec<&'static str> {
        self.fields
            .iter()
            .copied()
            .filter(|f| !using.contains(f))
            .collect()
    }
}
