//! Typed record mapping and Oracle SQL generation.
//!
//! `oramap` is the facade crate: it re-exports the core types and query
//! generators and provides [`Mapper`], the data-access facade that binds
//! record values, executes through an injected [`Connection`], and
//! rebuilds typed records from result rows.
//!
//! # Example
//!
//! ```rust,ignore
//! use oramap::prelude::*;
//!
//! let mut mapper = Mapper::new(connection);
//! mapper.insert(&record)?;
//! let found: Option<MyRecord> = mapper.select_one(Some("id = 1"))?;
//! for batch in mapper.select_in_batches::<MyRecord>(None, 100)? {
//!     process(batch?);
//! }
//! mapper.cleanup();
//! ```

pub mod batches;
pub mod mapper;

pub use batches::RecordBatches;
pub use mapper::{DEFAULT_BATCH_SIZE, DatabaseOps, Mapper};

pub use oramap_core::{
    BatchCursor, Connection, Error, ExecutionError, FilterError, Record, Result, RowValues,
    Schema, SchemaError, ValidationError, ValidationErrorKind, Value, ValueMap,
};
pub use oramap_query::{
    DENYLIST, check_where_clause, generate_delete, generate_insert, generate_select,
    generate_update, generate_upsert,
};

/// Convenience re-exports for the common case.
pub mod prelude {
    pub use crate::batches::RecordBatches;
    pub use crate::mapper::{DEFAULT_BATCH_SIZE, DatabaseOps, Mapper};
    pub use oramap_core::{
        BatchCursor, Connection, Error, Record, Result, RowValues, Schema, Value, ValueMap,
    };
}
