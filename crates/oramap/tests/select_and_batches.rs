//! Read-path semantics: single row, full scan, and batched fetch.

mod common;

use common::{FakeConnection, SimpleTable};
use oramap::prelude::*;

#[test]
fn select_one_returns_none_when_nothing_matches() {
    let mut mapper = Mapper::new(FakeConnection::default());
    let found: Option<SimpleTable> = mapper.select_one(Some("id = 999")).unwrap();
    assert!(found.is_none());
}

#[test]
fn select_one_zips_the_row_onto_declared_field_order() {
    let conn = FakeConnection::with_rows(vec![SimpleTable::sample_row(1)]);
    let mut mapper = Mapper::new(conn);

    let found: SimpleTable = mapper.select_one(Some("id = 1")).unwrap().unwrap();
    assert_eq!(found, SimpleTable::sample(1));
}

#[test]
fn select_all_returns_every_row_in_backend_order() {
    let conn = FakeConnection::with_rows(vec![
        SimpleTable::sample_row(1),
        SimpleTable::sample_row(2),
        SimpleTable::sample_row(3),
    ]);
    let mut mapper = Mapper::new(conn);

    let records: Vec<SimpleTable> = mapper.select_all(None).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, Some(1));
    assert_eq!(records[2].id, Some(3));
}

#[test]
fn select_all_on_empty_result_is_an_empty_vec() {
    let mut mapper = Mapper::new(FakeConnection::default());
    let records: Vec<SimpleTable> = mapper.select_all(None).unwrap();
    assert!(records.is_empty());
}

#[test]
fn select_rejects_dangerous_where_clauses_before_fetching() {
    let mut mapper = Mapper::new(FakeConnection::default());
    let err = mapper
        .select_all::<SimpleTable>(Some("1=1; DROP TABLE users"))
        .unwrap_err();
    assert!(matches!(err, Error::Filter(_)));
}

#[test]
fn select_in_batches_yields_fixed_size_batches_then_exhausts() {
    let rows = (1..=6).map(SimpleTable::sample_row).collect();
    let mut mapper = Mapper::new(FakeConnection::with_rows(rows));

    let mut batches = mapper.select_in_batches::<SimpleTable>(None, 2).unwrap();
    let mut seen = Vec::new();
    for batch in &mut batches {
        let batch = batch.unwrap();
        assert_eq!(batch.len(), 2);
        seen.extend(batch.into_iter().map(|r| r.id.unwrap()));
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6]);
    assert!(batches.next().is_none());
}

#[test]
fn select_in_batches_last_batch_may_be_short() {
    let rows = (1..=5).map(SimpleTable::sample_row).collect();
    let mut mapper = Mapper::new(FakeConnection::with_rows(rows));

    let sizes: Vec<usize> = mapper
        .select_in_batches::<SimpleTable>(None, 2)
        .unwrap()
        .map(|batch| batch.unwrap().len())
        .collect();
    assert_eq!(sizes, vec![2, 2, 1]);
}

#[test]
fn select_in_batches_is_safe_to_abandon_mid_iteration() {
    let rows = (1..=6).map(SimpleTable::sample_row).collect();
    let mut mapper = Mapper::new(FakeConnection::with_rows(rows));

    {
        let mut batches = mapper.select_in_batches::<SimpleTable>(None, 2).unwrap();
        let first = batches.next().unwrap().unwrap();
        assert_eq!(first.len(), 2);
        // Dropped here with four rows unread.
    }

    // The mapper is still usable afterwards.
    let all: Vec<SimpleTable> = mapper.select_all(None).unwrap();
    assert_eq!(all.len(), 6);
}

#[test]
fn write_then_read_back_round_trips_every_field() {
    let record = SimpleTable::sample(1);
    let mut mapper = Mapper::new(FakeConnection::default());
    mapper.insert(&record).unwrap();

    // Serve back exactly what the insert bound, in declared order.
    let (_, bound) = mapper.connection().unwrap().executed[0].clone();
    let row: Vec<Value> = SimpleTable::SCHEMA
        .fields
        .iter()
        .map(|f| bound.get(f).cloned().unwrap())
        .collect();
    mapper.connection_mut().unwrap().rows = vec![row];

    let read_back: SimpleTable = mapper.select_one(Some("id = 1")).unwrap().unwrap();
    assert_eq!(read_back, record);
}
