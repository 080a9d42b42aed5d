//! Bound procedure parameters and the database type tags they carry

use crate::Value;
use serde::{Deserialize, Serialize};

/// Database type tag attached to a bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DbType {
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    DateTime,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Direction of a procedure parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterDirection {
    #[default]
    Input,
    Output,
}

impl ParameterDirection {
    pub fn is_input(self) -> bool {
        self == ParameterDirection::Input
    }

    pub fn is_output(self) -> bool {
        self == ParameterDirection::Output
    }
}

/// Target database engine.
///
/// Collaborators report their engine so that engine-specific parameter
/// adjustments can be applied after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    #[default]
    Generic,
    SqlServer,
    Oracle,
    PostgreSql,
    MySql,
}

impl Engine {
    /// Identifier used in logs (e.g., "mssql", "oracle")
    pub fn id(self) -> &'static str {
        match self {
            Engine::Generic => "generic",
            Engine::SqlServer => "mssql",
            Engine::Oracle => "oracle",
            Engine::PostgreSql => "postgresql",
            Engine::MySql => "mysql",
        }
    }
}

/// A parameter ready to be handed to a stored-procedure call.
///
/// Output parameters start out as [`Value::Null`] and are populated by the
/// collaborator when the procedure has run.
#[derive(Debug, Clone, PartialEq)]
pub struct DbParameter {
    /// Parameter name as the procedure declares it (e.g., "IN_strCustomerName")
    pub name: String,
    /// Database type tag
    pub db_type: DbType,
    /// Input or output
    pub direction: ParameterDirection,
    /// Bound value for inputs, returned value for outputs
    pub value: Value,
    /// Numeric precision, if the engine needs one
    pub precision: Option<u8>,
    /// Numeric scale, if the engine needs one
    pub scale: Option<u8>,
}

impl DbParameter {
    /// Create a new parameter. A `None` value binds as NULL.
    pub fn new(
        name: impl Into<String>,
        db_type: DbType,
        value: Option<Value>,
        direction: ParameterDirection,
    ) -> Self {
        Self {
            name: name.into(),
            db_type,
            direction,
            value: value.unwrap_or(Value::Null),
            precision: None,
            scale: None,
        }
    }

    pub fn with_scale(mut self, scale: u8) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn is_output(&self) -> bool {
        self.direction.is_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_parameter_defaults_to_null() {
        let param = DbParameter::new(
            "OUT_intStatus",
            DbType::Int32,
            None,
            ParameterDirection::Output,
        );
        assert!(param.is_output());
        assert!(param.value.is_null());
        assert_eq!(param.scale, None);
    }

    #[test]
    fn test_builder_sets_numeric_facets() {
        let param = DbParameter::new(
            "OUT_numTotal",
            DbType::Decimal,
            None,
            ParameterDirection::Output,
        )
        .with_precision(18)
        .with_scale(6);
        assert_eq!(param.precision, Some(18));
        assert_eq!(param.scale, Some(6));
    }

    #[test]
    fn test_engine_ids() {
        assert_eq!(Engine::default(), Engine::Generic);
        assert_eq!(Engine::SqlServer.id(), "mssql");
    }
}
