//! Shared test doubles: an in-memory connection and a sample record type.

use oramap::ExecutionError;
use oramap::prelude::*;

/// Recording connection double.
///
/// Writes are recorded; reads are served from a preset result set whose
/// rows follow `SimpleTable`'s declared field order.
#[derive(Debug, Default)]
pub struct FakeConnection {
    pub executed: Vec<(String, ValueMap)>,
    pub executed_many: Vec<(String, Vec<ValueMap>)>,
    pub rows: Vec<Vec<Value>>,
    pub fail_next_execute: bool,
    pub fail_dispose: bool,
    pub disposed: bool,
}

impl FakeConnection {
    pub fn with_rows(rows: Vec<Vec<Value>>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    fn maybe_fail(&mut self, sql: &str) -> Result<()> {
        if self.fail_next_execute {
            self.fail_next_execute = false;
            return Err(ExecutionError::new("ORA-00001: forced failure")
                .with_sql(sql)
                .into());
        }
        Ok(())
    }
}

impl Connection for FakeConnection {
    type Batches<'c> = FakeBatches<'c>;

    fn execute(&mut self, sql: &str, values: &ValueMap) -> Result<Option<u64>> {
        self.maybe_fail(sql)?;
        self.executed.push((sql.to_string(), values.clone()));
        Ok(Some(1))
    }

    fn execute_many(&mut self, sql: &str, values: &[ValueMap]) -> Result<()> {
        self.maybe_fail(sql)?;
        self.executed_many.push((sql.to_string(), values.to_vec()));
        Ok(())
    }

    fn fetch_one(&mut self, sql: &str) -> Result<Option<Vec<Value>>> {
        self.maybe_fail(sql)?;
        Ok(self.rows.first().cloned())
    }

    fn fetch_all(&mut self, sql: &str) -> Result<Vec<Vec<Value>>> {
        self.maybe_fail(sql)?;
        Ok(self.rows.clone())
    }

    fn fetch_batches(&mut self, sql: &str, batch_size: usize) -> Result<FakeBatches<'_>> {
        self.maybe_fail(sql)?;
        Ok(FakeBatches {
            rows: &self.rows,
            pos: 0,
            batch_size,
        })
    }

    fn dispose(&mut self) -> Result<()> {
        self.disposed = true;
        if self.fail_dispose {
            Err(ExecutionError::new("teardown race on dispose").into())
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
pub struct FakeBatches<'c> {
    rows: &'c [Vec<Value>],
    pos: usize,
    batch_size: usize,
}

impl BatchCursor for FakeBatches<'_> {
    fn next_batch(&mut self) -> Result<Option<Vec<Vec<Value>>>> {
        if self.pos >= self.rows.len() {
            return Ok(None);
        }
        let end = (self.pos + self.batch_size).min(self.rows.len());
        let batch = self.rows[self.pos..end].to_vec();
        self.pos = end;
        Ok(Some(batch))
    }
}

/// The eight-field sample model from the golden templates.
///
/// `None` means "unset" for this model: `to_values` binds only the fields
/// that were given, which is what enables partial-field writes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimpleTable {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub is_active: Option<bool>,
    pub salary: Option<f64>,
    pub birth_date: Option<i32>,
    pub decimal_value: Option<String>,
}

impl Record for SimpleTable {
    const SCHEMA: Schema = Schema::new(
        "SimpleTable",
        Some("simple_table"),
        &[
            "id",
            "name",
            "created_at",
            "updated_at",
            "is_active",
            "salary",
            "birth_date",
            "decimal_value",
        ],
    );

    fn to_values(&self) -> ValueMap {
        let mut values = ValueMap::new();
        if let Some(id) = self.id {
            values.push("id", id);
        }
        if let Some(name) = &self.name {
            values.push("name", name.as_str());
        }
        if let Some(created_at) = self.created_at {
            values.push("created_at", created_at);
        }
        if let Some(updated_at) = self.updated_at {
            values.push("updated_at", updated_at);
        }
        if let Some(is_active) = self.is_active {
            values.push("is_active", is_active);
        }
        if let Some(salary) = self.salary {
            values.push("salary", salary);
        }
        if let Some(birth_date) = self.birth_date {
            values.push("birth_date", Value::Date(birth_date));
        }
        if let Some(decimal_value) = &self.decimal_value {
            values.push("decimal_value", Value::Decimal(decimal_value.clone()));
        }
        values
    }

    fn from_row(row: Vec<Value>) -> Result<Self> {
        let mut row = RowValues::new(Self::SCHEMA, row)?;
        Ok(Self {
            id: row.take("id")?.as_i64(),
            name: row.take("name")?.as_str().map(str::to_string),
            created_at: row.take("created_at")?.as_i64(),
            updated_at: row.take("updated_at")?.as_i64(),
            is_active: row.take("is_active")?.as_bool(),
            salary: row.take("salary")?.as_f64(),
            birth_date: match row.take("birth_date")? {
                Value::Date(d) => Some(d),
                _ => None,
            },
            decimal_value: match row.take("decimal_value")? {
                Value::Decimal(s) => Some(s),
                _ => None,
            },
        })
    }
}

impl SimpleTable {
    /// A fully-set sample record.
    pub fn sample(id: i64) -> Self {
        Self {
            id: Some(id),
            name: Some(format!("Test Name {id}")),
            created_at: Some(1_729_166_400),
            updated_at: Some(1_729_166_400),
            is_active: Some(true),
            salary: Some(1000.0),
            birth_date: Some(7305),
            decimal_value: Some("1234.56".to_string()),
        }
    }

    /// The row representation of [`sample`](Self::sample), in declared
    /// field order.
    pub fn sample_row(id: i64) -> Vec<Value> {
        let record = Self::sample(id);
        vec![
            Value::Int(id),
            Value::Text(record.name.unwrap()),
            Value::Int(record.created_at.unwrap()),
            Value::Int(record.updated_at.unwrap()),
            Value::Bool(true),
            Value::Double(1000.0),
            Value::Date(7305),
            Value::Decimal("1234.56".to_string()),
        ]
    }
}
