//! Execution collaborator traits.
//!
//! The mapper never talks to Oracle directly: it delegates every round-trip
//! to an injected [`Connection`]. All operations are blocking, single-owner
//! calls. Writes are transactional per call: the implementation commits on
//! success and rolls back the active scope before surfacing a failure, so
//! callers see the original error with no partial state behind it.

use crate::error::Result;
use crate::record::ValueMap;
use crate::value::Value;

/// A blocking database connection capable of executing parameterized SQL.
///
/// Implementations own the session/cursor lifecycle; the mapper only hands
/// over SQL text and named-parameter value maps. Thread safety is not
/// promised by this trait: a connection is effectively single-owner, which
/// the `&mut self` receivers make explicit.
pub trait Connection {
    /// The cursor type produced by [`fetch_batches`](Connection::fetch_batches).
    type Batches<'c>: BatchCursor
    where
        Self: 'c;

    /// Execute one statement with one set of named parameters.
    ///
    /// Returns the number of affected rows when the backend reports it.
    /// Commits on success, rolls back on failure.
    fn execute(&mut self, sql: &str, values: &ValueMap) -> Result<Option<u64>>;

    /// Execute one statement once per value map, in a single transaction.
    fn execute_many(&mut self, sql: &str, values: &[ValueMap]) -> Result<()>;

    /// Execute a query and return the first row, if any.
    ///
    /// Rows are ordered tuples; column order must match the declared field
    /// order of the schema the query was generated from.
    fn fetch_one(&mut self, sql: &str) -> Result<Option<Vec<Value>>>;

    /// Execute a query and return all rows.
    fn fetch_all(&mut self, sql: &str) -> Result<Vec<Vec<Value>>>;

    /// Execute a query and return a cursor producing fixed-size batches.
    ///
    /// The cursor is forward-only and finite. Dropping it mid-iteration
    /// must still release the underlying scope.
    fn fetch_batches(&mut self, sql: &str, batch_size: usize) -> Result<Self::Batches<'_>>;

    /// Release all held backend resources.
    fn dispose(&mut self) -> Result<()>;
}

/// A forward-only cursor over batches of result rows.
pub trait BatchCursor {
    /// Fetch the next batch, or `None` once the result set is exhausted.
    ///
    /// Every batch except possibly the last has the full requested size.
    fn next_batch(&mut self) -> Result<Option<Vec<Vec<Value>>>>;
}
