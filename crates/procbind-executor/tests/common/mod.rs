//! Common test utilities and mocks

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use procbind_core::{
    DataReader, DataSet, DataTable, Database, DbParameter, Engine, MemoryDataReader,
    ParameterDirection, ProcError, Result, Transaction, Value,
};
use std::sync::Arc;

/// Which collaborator method was called
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    NonQuery,
    DataSet,
    DataReader,
    Scalar,
}

/// One recorded collaborator call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub kind: CallKind,
    pub procedure: String,
    pub parameters: Vec<DbParameter>,
    pub transactional: bool,
}

/// Mock collaborator for exercising the executor without a real database.
///
/// Output parameters are filled from `output_values` in the order they were
/// bound. Every call is logged for assertions.
pub struct MockDatabase {
    pub engine: Engine,
    pub output_values: Vec<Value>,
    pub data_set: DataSet,
    pub reader_table: DataTable,
    pub scalar: Value,
    /// Turn every bound input into an output before filling outputs
    pub force_outputs: bool,
    pub should_fail: bool,
    pub calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self {
            engine: Engine::Generic,
            output_values: Vec::new(),
            data_set: DataSet::default(),
            reader_table: DataTable::default(),
            scalar: Value::Null,
            force_outputs: false,
            should_fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_outputs(mut self, values: Vec<Value>) -> Self {
        self.output_values = values;
        self
    }

    pub fn with_data_set(mut self, data_set: DataSet) -> Self {
        self.data_set = data_set;
        self
    }

    pub fn with_reader_table(mut self, table: DataTable) -> Self {
        self.reader_table = table;
        self
    }

    pub fn with_scalar(mut self, value: Value) -> Self {
        self.scalar = value;
        self
    }

    pub fn with_forced_outputs(mut self) -> Self {
        self.force_outputs = true;
        self
    }

    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    fn record(
        &self,
        kind: CallKind,
        procedure: &str,
        params: &mut [DbParameter],
        transactional: bool,
    ) -> Result<()> {
        self.calls.lock().push(RecordedCall {
            kind,
            procedure: procedure.to_string(),
            parameters: params.to_vec(),
            transactional,
        });

        if self.should_fail {
            return Err(ProcError::Driver(format!("{} failed", procedure)));
        }

        if self.force_outputs {
            for param in params.iter_mut() {
                param.direction = ParameterDirection::Output;
            }
        }

        let mut values = self.output_values.iter();
        for param in params.iter_mut().filter(|p| p.is_output()) {
            param.value = values.next().cloned().unwrap_or(Value::Null);
        }
        Ok(())
    }
}

#[async_trait]
impl Database for MockDatabase {
    fn engine(&self) -> Engine {
        self.engine
    }

    async fn execute_non_query(&self, procedure: &str, params: &mut [DbParameter]) -> Result<()> {
        self.record(CallKind::NonQuery, procedure, params, false)
    }

    async fn execute_non_query_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        _transaction: &dyn Transaction,
    ) -> Result<()> {
        self.record(CallKind::NonQuery, procedure, params, true)
    }

    async fn execute_data_set(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
    ) -> Result<DataSet> {
        self.record(CallKind::DataSet, procedure, params, false)?;
        Ok(self.data_set.clone())
    }

    async fn execute_data_set_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        _transaction: &dyn Transaction,
    ) -> Result<DataSet> {
        self.record(CallKind::DataSet, procedure, params, true)?;
        Ok(self.data_set.clone())
    }

    async fn execute_data_reader(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
    ) -> Result<Box<dyn DataReader>> {
        self.record(CallKind::DataReader, procedure, params, false)?;
        Ok(Box::new(MemoryDataReader::new(self.reader_table.clone())))
    }

    async fn execute_data_reader_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        _transaction: &dyn Transaction,
    ) -> Result<Box<dyn DataReader>> {
        self.record(CallKind::DataReader, procedure, params, true)?;
        Ok(Box::new(MemoryDataReader::new(self.reader_table.clone())))
    }

    async fn execute_scalar(&self, procedure: &str, params: &mut [DbParameter]) -> Result<Value> {
        self.record(CallKind::Scalar, procedure, params, false)?;
        Ok(self.scalar.clone())
    }

    async fn execute_scalar_in(
        &self,
        procedure: &str,
        params: &mut [DbParameter],
        _transaction: &dyn Transaction,
    ) -> Result<Value> {
        self.record(CallKind::Scalar, procedure, params, true)?;
        Ok(self.scalar.clone())
    }
}

/// Transaction handle that does nothing
pub struct MockTransaction;

#[async_trait]
impl Transaction for MockTransaction {
    async fn commit(self: Box<Self>) -> Result<()> {
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
