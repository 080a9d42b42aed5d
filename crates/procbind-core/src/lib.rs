//! procbind core - shared types and traits for stored-procedure contracts
//!
//! This crate provides the types every other procbind crate depends on:
//!
//! - `MethodSignature` - statically declared method contract and its builder
//! - `ContractCatalog` - contracts loaded from a TOML catalog
//! - `Database` - trait for the database-access collaborator
//! - `Transaction` / `DataReader` - collaborator-owned handles
//! - Common types like `Value`, `DbParameter`, `DataSet`, etc.

pub mod contract_config;
mod database;
mod error;
mod parameter;
mod signature;
mod types;

pub use contract_config::{ContractCatalog, ContractEntry};
pub use database::*;
pub use error::*;
pub use parameter::*;
pub use signature::*;
pub use types::*;
