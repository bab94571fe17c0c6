//! Record mapper: the data-access facade.
//!
//! [`Mapper`] bridges typed records to the query generators and to an
//! injected [`Connection`]. It extracts value maps from record instances,
//! asks `oramap-query` for the SQL text, delegates execution, and rebuilds
//! typed records from result rows on the read paths.
//!
//! The call model is single-threaded and blocking. Rollback on failure is
//! the connection's contract; the mapper logs the failure and propagates
//! the original error unchanged.

use crate::batches::RecordBatches;
use oramap_core::{Connection, Error, Record, Result, ValueMap};
use oramap_query::{
    generate_delete, generate_insert, generate_select, generate_update, generate_upsert,
};

/// Batch size used by callers that do not specify one.
pub const DEFAULT_BATCH_SIZE: usize = 100;

const EXEC_ERROR_MSG: &str = "error while executing the query in the database";

/// The data-access capability set.
///
/// One trait instead of an inheritance hierarchy: any backend-specific
/// mapper implements this directly. Plural operations are no-ops (with a
/// warning) on empty input; singular operations always execute.
pub trait DatabaseOps {
    /// The batched-select iterator type.
    type Batches<'s, R: Record>: Iterator<Item = Result<Vec<R>>>
    where
        Self: 's;

    /// Insert one record, binding only its explicitly-set fields.
    fn insert<R: Record>(&mut self, record: &R) -> Result<()>;

    /// Insert many records with one statement and one batched execution.
    fn insert_many<R: Record>(&mut self, records: &[R]) -> Result<()>;

    /// Merge one record: update on key match, insert otherwise.
    fn upsert<R: Record>(&mut self, record: &R, using: &[&str]) -> Result<()>;

    /// Merge many records in one batched execution.
    fn upsert_many<R: Record>(&mut self, records: &[R], using: &[&str]) -> Result<()>;

    /// Update one record, keyed on the `using` fields.
    fn update<R: Record>(&mut self, record: &R, using: &[&str]) -> Result<()>;

    /// Update many records in one batched execution.
    fn update_all<R: Record>(&mut self, records: &[R], using: &[&str]) -> Result<()>;

    /// Delete one record, keyed on the `using` fields.
    fn delete<R: Record>(&mut self, record: &R, using: &[&str]) -> Result<()>;

    /// Delete many records in one batched execution.
    fn delete_all<R: Record>(&mut self, records: &[R], using: &[&str]) -> Result<()>;

    /// Fetch at most one record; `None` when nothing matches.
    fn select_one<R: Record>(&mut self, where_clause: Option<&str>) -> Result<Option<R>>;

    /// Fetch all matching records, in backend order.
    fn select_all<R: Record>(&mut self, where_clause: Option<&str>) -> Result<Vec<R>>;

    /// Fetch matching records lazily in fixed-size batches.
    fn select_in_batches<'s, R: Record>(
        &'s mut self,
        where_clause: Option<&str>,
        batch_size: usize,
    ) -> Result<Self::Batches<'s, R>>;

    /// Release the backend connection. Never raises: this runs on
    /// shutdown paths, so failures are logged and suppressed.
    fn cleanup(&mut self);
}

/// A record mapper over an injected connection.
///
/// Two states: connected (holds the connection) and closed (after
/// [`cleanup`](DatabaseOps::cleanup)). Operations on a closed mapper fail
/// with [`Error::NotConnected`] instead of an obscure backend error.
#[derive(Debug)]
pub struct Mapper<C: Connection> {
    connection: Option<C>,
}

impl<C: Connection> Mapper<C> {
    /// Create a mapper over a live connection.
    pub fn new(connection: C) -> Self {
        Self {
            connection: Some(connection),
        }
    }

    /// Whether the mapper still holds its connection.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Get a reference to the underlying connection, if still connected.
    #[must_use]
    pub fn connection(&self) -> Option<&C> {
        self.connection.as_ref()
    }

    /// Get a mutable reference to the underlying connection.
    pub fn connection_mut(&mut self) -> Option<&mut C> {
        self.connection.as_mut()
    }

    fn live(&mut self) -> Result<&mut C> {
        self.connection.as_mut().ok_or(Error::NotConnected)
    }

    fn run(&mut self, sql: &str, values: &ValueMap) -> Result<()> {
        let connection = self.live()?;
        match connection.execute(sql, values) {
            Ok(_) => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, sql, "{EXEC_ERROR_MSG}");
                Err(e)
            }
        }
    }

    fn run_many(&mut self, sql: &str, values: &[ValueMap]) -> Result<()> {
        let connection = self.live()?;
        match connection.execute_many(sql, values) {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, sql, "{EXEC_ERROR_MSG}");
                Err(e)
            }
        }
    }
}

impl<C: Connection> DatabaseOps for Mapper<C> {
    type Batches<'s, R: Record>
        = RecordBatches<C::Batches<'s>, R>
    where
        Self: 's;

    fn insert<R: Record>(&mut self, record: &R) -> Result<()> {
        let sql = generate_insert(&R::SCHEMA)?;
        self.run(&sql, &record.to_values())
    }

    fn insert_many<R: Record>(&mut self, records: &[R]) -> Result<()> {
        if records.is_empty() {
            tracing::warn!("nothing to insert");
            return Ok(());
        }
        let sql = generate_insert(&R::SCHEMA)?;
        let values: Vec<ValueMap> = records.iter().map(Record::to_values).collect();
        self.run_many(&sql, &values)
    }

    fn upsert<R: Record>(&mut self, record: &R, using: &[&str]) -> Result<()> {
        let sql = generate_upsert(&R::SCHEMA, using)?;
        self.run(&sql, &record.to_values())
    }

    fn upsert_many<R: Record>(&mut self, records: &[R], using: &[&str]) -> Result<()> {
        if records.is_empty() {
            tracing::warn!("nothing to upsert");
            return Ok(());
        }
        let sql = generate_upsert(&R::SCHEMA, using)?;
        let values: Vec<ValueMap> = records.iter().map(Record::to_values).collect();
        self.run_many(&sql, &values)
    }

    fn update<R: Record>(&mut self, record: &R, using: &[&str]) -> Result<()> {
        let sql = generate_update(&R::SCHEMA, using)?;
        self.run(&sql, &record.to_values())
    }

    fn update_all<R: Record>(&mut self, records: &[R], using: &[&str]) -> Result<()> {
        if records.is_empty() {
            tracing::warn!("nothing to update");
            return Ok(());
        }
        let sql = generate_update(&R::SCHEMA, using)?;
        let values: Vec<ValueMap> = records.iter().map(Record::to_values).collect();
        self.run_many(&sql, &values)
    }

    fn delete<R: Record>(&mut self, record: &R, using: &[&str]) -> Result<()> {
        let sql = generate_delete(&R::SCHEMA, using)?;
        // Only the key fields are relevant to a delete.
        let keys = R::SCHEMA.ordered_subset(using);
        self.run(&sql, &record.to_values().restricted_to(&keys))
    }

    fn delete_all<R: Record>(&mut self, records: &[R], using: &[&str]) -> Result<()> {
        if records.is_empty() {
            tracing::warn!("nothing to delete");
            return Ok(());
        }
        let sql = generate_delete(&R::SCHEMA, using)?;
        let keys = R::SCHEMA.ordered_subset(using);
        let values: Vec<ValueMap> = records
            .iter()
            .map(|r| r.to_values().restricted_to(&keys))
            .collect();
        self.run_many(&sql, &values)
    }

    fn select_one<R: Record>(&mut self, where_clause: Option<&str>) -> Result<Option<R>> {
        let sql = generate_select(&R::SCHEMA, where_clause)?;
        let connection = self.live()?;
        match connection.fetch_one(&sql) {
            Ok(Some(row)) => Ok(Some(R::from_row(row)?)),
            Ok(None) => Ok(None),
            Err(e) => {
                tracing::error!(error = %e, sql, "{EXEC_ERROR_MSG}");
                Err(e)
            }
        }
    }

    fn select_all<R: Record>(&mut self, where_clause: Option<&str>) -> Result<Vec<R>> {
        let sql = generate_select(&R::SCHEMA, where_clause)?;
        let connection = self.live()?;
        match connection.fetch_all(&sql) {
            Ok(rows) => rows.into_iter().map(R::from_row).collect(),
            Err(e) => {
                tracing::error!(error = %e, sql, "{EXEC_ERROR_MSG}");
                Err(e)
            }
        }
    }

    fn select_in_batches<'s, R: Record>(
        &'s mut self,
        where_clause: Option<&str>,
        batch_size: usize,
    ) -> Result<Self::Batches<'s, R>> {
        let sql = generate_select(&R::SCHEMA, where_clause)?;
        let connection = self.connection.as_mut().ok_or(Error::NotConnected)?;
        match connection.fetch_batches(&sql, batch_size) {
            Ok(cursor) => Ok(RecordBatches::new(cursor)),
            Err(e) => {
                tracing::error!(error = %e, sql, "{EXEC_ERROR_MSG}");
                Err(e)
            }
        }
    }

    fn cleanup(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            match connection.dispose() {
                Ok(()) => tracing::info!("database connection disposed"),
                Err(e) => tracing::error!(error = %e, "error on resources cleanup"),
            }
        }
    }
}
