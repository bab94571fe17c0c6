//! Deterministic Oracle SQL generation for oramap.
//!
//! `oramap-query` is the **query construction layer**: pure, side-effect
//! free functions that turn [`Schema`](oramap_core::Schema) metadata and a
//! caller-supplied key-field set into parameterized Oracle SQL text.
//!
//! # Role In The Architecture
//!
//! - `generate_insert` / `generate_select` / `generate_delete` /
//!   `generate_update` / `generate_upsert` build the five statement shapes.
//! - `check_where_clause` guards free-text SELECT filters with a fixed
//!   substring denylist.
//!
//! The resulting SQL executes through the `Connection` trait from
//! `oramap-core`; most users reach these generators via the `oramap`
//! facade crate. Statements are constructed fresh per call, immutable,
//! and never cached.

pub mod filter;
pub mod generate;

pub use filter::{DENYLIST, check_where_clause};
pub use generate::{
    generate_delete, generate_insert, generate_select, generate_update, generate_upsert,
};
