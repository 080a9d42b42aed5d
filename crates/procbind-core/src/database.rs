//! Database-access collaborator traits
//!
//! The executor never talks to an engine directly. It builds parameters
//! through [`Database::create_parameter`] and hands the finished call to one
//! of the `execute_*` methods. Methods ending in `_in` are the transactional
//! overloads.

use crate::{
    ColumnMeta, DataSet, DataTable, DbParameter, DbType, Engine, ParameterDirection, Result, Row,
    Value,
};
use async_trait::async_trait;
use std::collections::VecDeque;

/// An active database transaction owned by the collaborator
#[async_trait]
pub trait Transaction: Send + Sync {
    /// Commit the transaction
    async fn commit(self: Box<Self>) -> Result<()>;

    /// Rollback the transaction
    async fn rollback(self: Box<Self>) -> Result<()>;
}

/// A forward-only cursor over a procedure's result rows.
///
/// Ownership passes to the caller, who is responsible for closing it.
#[async_trait]
pub trait DataReader: Send {
    /// Column metadata of the current result set
    fn columns(&self) -> &[ColumnMeta];

    /// Fetch the next row, or `None` once the cursor is exhausted
    async fn next_row(&mut self) -> Result<Option<Row>>;

    /// Release the cursor
    async fn close(self: Box<Self>) -> Result<()>;
}

/// A database that can run stored procedures
#[async_trait]
pub trait Database: Send + Sync {
    /// Engine this collaborator talks to
    fn engine(&self) -> Engine {
        Engine::Generic
    }

    /// Construct a parameter object for a procedure call
    fn create_parameter(
        &self,
        name: &str,
        db_type: DbType,
        value: Option<Value>,
        direction: ParameterDirection,
    ) -> Result<DbParameter> {
        Ok(DbParameter::new(name, db_type, value, direction))
    }

    /// Run a procedure that returns no rows, populating output parameters
    async fn execute_non_query(&self, procedure: &str, params: &mut [DbParameter]) -> Result<()>;

    /// Transactional overload of [`Database::execute_non_query`]
    async fn execute_non_query_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        transaction: &dyn Transaction,
    ) -> Result<()>;

    /// Run a procedure and buffer every result set it returns
    async fn execute_data_set(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
    ) -> Result<DataSet>;

    /// Transactional overload of [`Database::execute_data_set`]
    async fn execute_data_set_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        transaction: &dyn Transaction,
    ) -> Result<DataSet>;

    /// Run a procedure and stream its rows
    async fn execute_data_reader(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
    ) -> Result<Box<dyn DataReader>>;

    /// Transactional overload of [`Database::execute_data_reader`]
    async fn execute_data_reader_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        transaction: &dyn Transaction,
    ) -> Result<Box<dyn DataReader>>;

    /// Run a procedure and return the first column of its first row
    async fn execute_scalar(&self, procedure: &str, params: &mut [DbParameter]) -> Result<Value>;

    /// Transactional overload of [`Database::execute_scalar`]
    async fn execute_scalar_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        transaction: &dyn Transaction,
    ) -> Result<Value>;
}

/// A [`DataReader`] over an already buffered table
#[derive(Debug)]
pub struct MemoryDataReader {
    columns: Vec<ColumnMeta>,
    rows: VecDeque<Row>,
}

impl MemoryDataReader {
    pub fn new(table: DataTable) -> Self {
        Self {
            columns: table.columns,
            rows: table.rows.into(),
        }
    }

    /// Rows not yet read
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }
}

#[async_trait]
impl DataReader for MemoryDataReader {
    fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    async fn next_row(&mut self) -> Result<Option<Row>> {
        Ok(self.rows.pop_front())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        tracing::trace!(unread = self.rows.len(), "closing in-memory reader");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_reader_yields_rows_in_order() {
        let table = DataTable::from_rows(
            &["id"],
            vec![vec![Value::Int32(1)], vec![Value::Int32(2)]],
        );
        let mut reader = MemoryDataReader::new(table);

        assert_eq!(reader.columns().len(), 1);
        let first = reader.next_row().await.unwrap().unwrap();
        assert_eq!(first.get(0), Some(&Value::Int32(1)));
        assert_eq!(reader.remaining(), 1);
        let second = reader.next_row().await.unwrap().unwrap();
        assert_eq!(second.get(0), Some(&Value::Int32(2)));
        assert!(reader.next_row().await.unwrap().is_none());

        Box::new(reader).close().await.unwrap();
    }
}
