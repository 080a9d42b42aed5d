//! procbind executor - turns method contracts into stored-procedure calls
//!
//! Given a [`MethodSignature`](procbind_core::MethodSignature) and the
//! call-site arguments, the executor derives the procedure's parameter
//! names from the naming convention, maps declared types to database types,
//! delegates the call to a [`Database`](procbind_core::Database)
//! collaborator and marshals output parameters back.

pub mod adjust;
pub mod binder;
mod executor;
pub mod locator;
pub mod marshal;
pub mod naming;
pub mod type_map;

#[cfg(test)]
mod binder_tests;
#[cfg(test)]
mod naming_tests;
#[cfg(test)]
mod type_map_tests;

pub use adjust::{OutputDecimalScale, ParameterAdjustment};
pub use executor::{Invocation, ProcedureExecutor};

/// Re-export commonly used types from procbind-core
pub use procbind_core::{
    ContractCatalog, DataReader, DataSet, Database, DbParameter, DbType, Engine, MethodSignature,
    ParamType, ParameterDirection, ProcError, Result, Transaction, Value,
};
