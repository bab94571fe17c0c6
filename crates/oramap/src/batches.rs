//! Lazy batched record fetching.

use oramap_core::{BatchCursor, Record, Result};
use std::marker::PhantomData;

/// A lazy, finite, forward-only iterator of record batches.
///
/// Wraps a backend [`BatchCursor`] and maps each fetched batch of rows
/// onto typed records. Not restartable; once exhausted (or failed) it
/// stays exhausted. Safe to abandon mid-iteration: dropping the iterator
/// drops the cursor, which releases the underlying scope.
#[derive(Debug)]
pub struct RecordBatches<B, R> {
    cursor: B,
    done: bool,
    _marker: PhantomData<fn() -> R>,
}

impl<B: BatchCursor, R: Record> RecordBatches<B, R> {
    pub(crate) fn new(cursor: B) -> Self {
        Self {
            cursor,
            done: false,
            _marker: PhantomData,
        }
    }
}

impl<B: BatchCursor, R: Record> Iterator for RecordBatches<B, R> {
    type Item = Result<Vec<R>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.next_batch() {
            Ok(Some(rows)) => Some(rows.into_iter().map(R::from_row).collect()),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
