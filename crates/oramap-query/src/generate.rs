//! Statement generators.
//!
//! Each generator is a pure string template over [`Schema`] metadata: no
//! query plan, no backend round-trip, no instance state. Placeholders use
//! Oracle named-parameter syntax (`:field`), one per value-bearing field.
//! Output is deterministic: field order in every generated column list,
//! SET clause, and WHERE condition follows the schema's declared order,
//! never the input order of `using`.

use crate::filter::check_where_clause;
use oramap_core::{Result, Schema, ValidationError};

/// Build an INSERT over all declared fields.
///
/// Filtering down to explicitly-set fields is the mapper's job when it
/// builds the value map; the statement itself always names every column.
pub fn generate_insert(schema: &Schema) -> Result<String> {
    let table = schema.table()?;
    let columns = schema.fields.join(", ");
    let placeholders = placeholders(schema.fields);
    Ok(format!(
        "INSERT INTO {table} ({columns}) VALUES ({placeholders})"
    ))
}

/// Build a SELECT over all declared fields, with an optional free-text
/// WHERE clause.
///
/// An empty clause behaves exactly like an absent one. A non-empty clause
/// is checked against the denylist and then appended verbatim.
pub fn generate_select(schema: &Schema, where_clause: Option<&str>) -> Result<String> {
    let table = schema.table()?;
    let mut sql = format!("SELECT {} FROM {}", schema.fields.join(", "), table);
    match where_clause {
        Some(clause) if !clause.is_empty() => {
            check_where_clause(clause)?;
            sql.push_str(" WHERE ");
            sql.push_str(clause);
        }
        _ => {}
    }
    Ok(sql)
}

/// Build a DELETE keyed on the `using` fields.
pub fn generate_delete(schema: &Schema, using: &[&str]) -> Result<String> {
    let table = schema.table()?;
    schema.require_using(using)?;
    let conditions = qualified_conditions(table, &schema.ordered_subset(using));
    Ok(format!("DELETE FROM {table} WHERE {conditions}"))
}

/// Build an UPDATE setting every declared field outside `using`, keyed on
/// the `using` fields.
pub fn generate_update(schema: &Schema, using: &[&str]) -> Result<String> {
    let table = schema.table()?;
    schema.require_using(using)?;

    let fields_to_update = schema.ordered_complement(using);
    if fields_to_update.is_empty() {
        return Err(ValidationError::nothing_to_update().into());
    }

    let set_clause = fields_to_update
        .iter()
        .map(|f| format!("{table}.{f} = :{f}"))
        .collect::<Vec<_>>()
        .join(", ");
    let conditions = qualified_conditions(table, &schema.ordered_subset(using));
    Ok(format!(
        "UPDATE {table} SET {set_clause} WHERE {conditions}"
    ))
}

/// Build a single atomic MERGE: update on key match, insert otherwise.
///
/// A synthetic source row is built from the `using` fields as named
/// parameters (`SELECT :k AS k ... FROM dual`). On match, the complement
/// fields are SET from parameters; on no-match, all fields are inserted.
/// When `using` covers every field there is nothing to set, so the WHEN
/// MATCHED branch is omitted and the statement degenerates to
/// insert-if-absent.
pub fn generate_upsert(schema: &Schema, using: &[&str]) -> Result<String> {
    let table = schema.table()?;
    schema.require_using(using)?;

    let keys = schema.ordered_subset(using);
    let source_row = keys
        .iter()
        .map(|k| format!(":{k} AS {k}"))
        .collect::<Vec<_>>()
        .join(", ");
    let match_condition = keys
        .iter()
        .map(|k| format!("{table}.{k} = src.{k}"))
        .collect::<Vec<_>>()
        .join(" AND ");

    let mut sql = format!(
        "MERGE INTO {table} USING (SELECT {source_row} FROM dual) src ON ({match_condition})"
    );

    let fields_to_update = schema.ordered_complement(using);
    if !fields_to_update.is_empty() {
        let set_clause = fields_to_update
            .iter()
            .map(|f| format!("{f} = :{f}"))
            .collect::<Vec<_>>()
            .join(", ");
        sql.push_str(" WHEN MATCHED THEN UPDATE SET ");
        sql.push_str(&set_clause);
    }

    sql.push_str(" WHEN NOT MATCHED THEN INSERT (");
    sql.push_str(&schema.fields.join(", "));
    sql.push_str(") VALUES (");
    sql.push_str(&placeholders(schema.fields));
    sql.push(')');
    Ok(sql)
}

fn placeholders(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| format!(":{f}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn qualified_conditions(table: &str, keys: &[&'static str]) -> String {
    keys.iter()
        .map(|k| format!("{table}.{k} = :{k}"))
        .collect::<Vec<_>>()
        .join(" AND ")
}
