//! Mapping from declared parameter types to database type tags and the
//! type tokens embedded in procedure parameter names

use procbind_core::{DbType, ParamType, ProcError, Result};

/// Token for string parameters
pub const STRING_TOKEN: &str = "str";
/// Token for the integer family (booleans included)
pub const INTEGRAL_TOKEN: &str = "int";
/// Token for date/time parameters
pub const DATE_TOKEN: &str = "dat";
/// Token for fixed point numerics
pub const PRECISE_NUMERIC_TOKEN: &str = "num";
/// Token for floating point numerics
pub const APPROXIMATE_NUMERIC_TOKEN: &str = "num";

/// Map a declared type to the database type it binds as.
///
/// Booleans bind as `Int32` (0 = false, nonzero = true) since not every
/// target engine can carry a boolean parameter.
pub fn map_db_type(ty: &ParamType) -> Result<DbType> {
    match ty {
        ParamType::Int32 => Ok(DbType::Int32),
        ParamType::UInt32 => Ok(DbType::UInt32),
        ParamType::Int64 => Ok(DbType::Int64),
        ParamType::UInt64 => Ok(DbType::UInt64),
        ParamType::Int16 => Ok(DbType::Int16),
        ParamType::UInt16 => Ok(DbType::UInt16),
        ParamType::Decimal => Ok(DbType::Decimal),
        ParamType::Float32 => Ok(DbType::Single),
        ParamType::Float64 => Ok(DbType::Double),
        ParamType::String => Ok(DbType::String),
        ParamType::DateTime => Ok(DbType::DateTime),
        ParamType::Boolean => Ok(DbType::Int32),
        other => Err(ProcError::Mapping(format!(
            "cannot map {} to a db type",
            other
        ))),
    }
}

/// Map a declared type to its parameter-name token
pub fn naming_token(ty: &ParamType) -> Result<&'static str> {
    match ty {
        ParamType::Int16
        | ParamType::UInt16
        | ParamType::Int32
        | ParamType::UInt32
        | ParamType::Int64
        | ParamType::UInt64
        | ParamType::Boolean => Ok(INTEGRAL_TOKEN),
        ParamType::DateTime => Ok(DATE_TOKEN),
        ParamType::Decimal => Ok(PRECISE_NUMERIC_TOKEN),
        ParamType::String => Ok(STRING_TOKEN),
        ParamType::Float32 | ParamType::Float64 => Ok(APPROXIMATE_NUMERIC_TOKEN),
        other => Err(ProcError::Mapping(format!(
            "cannot map {} to a db type name",
            other
        ))),
    }
}
