//! Statically declared method contracts
//!
//! A [`MethodSignature`] describes a callable contract: its own name, the
//! stored-procedure options attached to it and its ordered parameter list.
//! Signatures are built once, either through [`SignatureBuilder`] or from a
//! TOML contract catalog, and are read-only afterwards.

use crate::{ParameterDirection, ProcError, Result};
use serde::{Deserialize, Serialize};

/// Semantic type of a declared parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParamType {
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Float32,
    Float64,
    String,
    DateTime,
    Boolean,
    /// Carries an active transaction; never bound as a procedure parameter
    Transaction,
    Bytes,
    /// Any other type, named for diagnostics (enums, custom structs, ...)
    Other(String),
}

impl ParamType {
    pub fn name(&self) -> &str {
        match self {
            ParamType::Int16 => "int16",
            ParamType::UInt16 => "uint16",
            ParamType::Int32 => "int32",
            ParamType::UInt32 => "uint32",
            ParamType::Int64 => "int64",
            ParamType::UInt64 => "uint64",
            ParamType::Decimal => "decimal",
            ParamType::Float32 => "float32",
            ParamType::Float64 => "float64",
            ParamType::String => "string",
            ParamType::DateTime => "datetime",
            ParamType::Boolean => "boolean",
            ParamType::Transaction => "transaction",
            ParamType::Bytes => "bytes",
            ParamType::Other(name) => name,
        }
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self, ParamType::Transaction)
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, ParamType::Boolean)
    }
}

impl From<String> for ParamType {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "int16" | "short" => ParamType::Int16,
            "uint16" | "ushort" => ParamType::UInt16,
            "int32" | "int" => ParamType::Int32,
            "uint32" | "uint" => ParamType::UInt32,
            "int64" | "long" => ParamType::Int64,
            "uint64" | "ulong" => ParamType::UInt64,
            "decimal" => ParamType::Decimal,
            "float32" | "float" => ParamType::Float32,
            "float64" | "double" => ParamType::Float64,
            "string" => ParamType::String,
            "datetime" => ParamType::DateTime,
            "boolean" | "bool" => ParamType::Boolean,
            "transaction" => ParamType::Transaction,
            "bytes" => ParamType::Bytes,
            _ => ParamType::Other(name),
        }
    }
}

impl From<ParamType> for String {
    fn from(ty: ParamType) -> Self {
        ty.name().to_string()
    }
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One declared parameter of a method contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: ParamType,
    #[serde(default)]
    pub direction: ParameterDirection,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: ParamType, direction: ParameterDirection) -> Self {
        Self {
            name: name.into(),
            ty,
            direction,
        }
    }

    pub fn is_transaction(&self) -> bool {
        self.ty.is_transaction()
    }
}

/// Stored-procedure options attached to a method contract
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcedureOptions {
    /// Package/schema qualifying the procedure. Required at call time.
    #[serde(default)]
    pub package_name: Option<String>,
    /// Procedure name, when it differs from the method name
    #[serde(default)]
    pub procedure_name: Option<String>,
    /// Leave out the "IN_"/"OUT_" prefix from parameter names
    #[serde(default)]
    pub omit_direction: bool,
    /// Leave out the type token from parameter names
    #[serde(default)]
    pub omit_type: bool,
}

/// A method contract describing one stored-procedure call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    method_name: String,
    options: ProcedureOptions,
    parameters: Vec<ParameterDescriptor>,
}

impl MethodSignature {
    /// Start building a signature for the method with the given name
    pub fn builder(method_name: impl Into<String>) -> SignatureBuilder {
        SignatureBuilder::new(method_name)
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn options(&self) -> &ProcedureOptions {
        &self.options
    }

    /// All declared parameters, transaction markers included, in order
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Declared input parameters in ordinal order, transaction markers excluded
    pub fn inputs(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters
            .iter()
            .filter(|p| !p.is_transaction() && p.direction.is_input())
    }

    /// Declared output parameters in ordinal order
    pub fn outputs(&self) -> impl Iterator<Item = &ParameterDescriptor> {
        self.parameters
            .iter()
            .filter(|p| !p.is_transaction() && p.direction.is_output())
    }
}

/// Builder for [`MethodSignature`]
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    method_name: String,
    options: ProcedureOptions,
    parameters: Vec<ParameterDescriptor>,
}

impl SignatureBuilder {
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            options: ProcedureOptions::default(),
            parameters: Vec::new(),
        }
    }

    pub fn package(mut self, package_name: impl Into<String>) -> Self {
        self.options.package_name = Some(package_name.into());
        self
    }

    pub fn procedure_name(mut self, procedure_name: impl Into<String>) -> Self {
        self.options.procedure_name = Some(procedure_name.into());
        self
    }

    pub fn omit_direction(mut self) -> Self {
        self.options.omit_direction = true;
        self
    }

    pub fn omit_type(mut self) -> Self {
        self.options.omit_type = true;
        self
    }

    /// Replace all options at once
    pub fn options(mut self, options: ProcedureOptions) -> Self {
        self.options = options;
        self
    }

    pub fn input(self, name: impl Into<String>, ty: ParamType) -> Self {
        self.parameter(ParameterDescriptor::new(name, ty, ParameterDirection::Input))
    }

    pub fn output(self, name: impl Into<String>, ty: ParamType) -> Self {
        self.parameter(ParameterDescriptor::new(name, ty, ParameterDirection::Output))
    }

    /// Declare a transaction-carrying parameter
    pub fn transaction(self, name: impl Into<String>) -> Self {
        self.parameter(ParameterDescriptor::new(
            name,
            ParamType::Transaction,
            ParameterDirection::Input,
        ))
    }

    pub fn parameter(mut self, descriptor: ParameterDescriptor) -> Self {
        self.parameters.push(descriptor);
        self
    }

    /// Validate names and produce the signature.
    ///
    /// A missing package is accepted here and reported when the procedure
    /// name is resolved. An empty package, procedure or parameter name is
    /// rejected.
    pub fn build(self) -> Result<MethodSignature> {
        if self.method_name.trim().is_empty() {
            return Err(ProcError::Configuration(
                "method name cannot be empty".to_string(),
            ));
        }
        if let Some(package) = &self.options.package_name
            && package.trim().is_empty()
        {
            return Err(ProcError::Configuration(format!(
                "package name for {} cannot be empty",
                self.method_name
            )));
        }
        if let Some(procedure) = &self.options.procedure_name
            && procedure.trim().is_empty()
        {
            return Err(ProcError::Configuration(format!(
                "procedure name override for {} cannot be empty",
                self.method_name
            )));
        }
        if let Some(position) = self.parameters.iter().position(|p| p.name.is_empty()) {
            return Err(ProcError::Configuration(format!(
                "parameter {} of {} has no name",
                position, self.method_name
            )));
        }

        Ok(MethodSignature {
            method_name: self.method_name,
            options: self.options,
            parameters: self.parameters,
        })
    }
}
