//! Core types and traits for oramap.
//!
//! This crate provides the foundational abstractions for record-to-SQL
//! mapping:
//!
//! - `Schema` metadata describing a record type's table and field order
//! - `Record` trait for typed struct mapping
//! - `Value` dynamic SQL values and `ValueMap` named-parameter bindings
//! - `Connection` trait for the injected execution collaborator
//! - The error taxonomy shared across the workspace

pub mod connection;
pub mod error;
pub mod record;
pub mod schema;
pub mod value;

pub use connection::{BatchCursor, Connection};
pub use error::{
    Error, ExecutionError, FilterError, Result, SchemaError, ValidationError, ValidationErrorKind,
};
pub use record::{Record, RowValues, ValueMap};
pub use schema::Schema;
pub use value::Value;
