//! TOML contract catalogs
//!
//! A catalog declares method contracts in a `contracts.toml` file instead of
//! in code:
//!
//! ```toml
//! [[procedure]]
//! method = "GetStatus"
//! package = "ORDERS"
//! procedure = "Fetch"
//! parameters = [
//!   { name = "customerName", type = "string" },
//!   { name = "status", type = "int32", direction = "output" },
//! ]
//! ```

use crate::{MethodSignature, ParameterDescriptor, ProcError, ProcedureOptions, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One `[[procedure]]` table from a contract catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractEntry {
    /// Method name, used as the procedure name unless `procedure` is set
    pub method: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub omit_direction: bool,
    #[serde(default)]
    pub omit_type: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl ContractEntry {
    /// Validate the entry and turn it into a signature
    pub fn into_signature(self) -> Result<MethodSignature> {
        self.parameters
            .into_iter()
            .fold(
                MethodSignature::builder(self.method).options(ProcedureOptions {
                    package_name: self.package,
                    procedure_name: self.procedure,
                    omit_direction: self.omit_direction,
                    omit_type: self.omit_type,
                }),
                |builder, param| builder.parameter(param),
            )
            .build()
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    procedure: Vec<ContractEntry>,
}

/// Method contracts keyed by method name
#[derive(Debug, Clone, Default)]
pub struct ContractCatalog {
    signatures: BTreeMap<String, MethodSignature>,
}

impl ContractCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(toml_str)?;
        let mut catalog = Self::new();
        for entry in file.procedure {
            catalog.insert(entry.into_signature()?)?;
        }
        tracing::debug!(contracts = catalog.len(), "loaded contract catalog");
        Ok(catalog)
    }

    /// Read and parse a catalog file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading contract catalog");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Add a signature. Method names must be unique within a catalog.
    pub fn insert(&mut self, signature: MethodSignature) -> Result<()> {
        let name = signature.method_name().to_string();
        if self.signatures.contains_key(&name) {
            return Err(ProcError::Configuration(format!(
                "contract {} is declared more than once",
                name
            )));
        }
        self.signatures.insert(name, signature);
        Ok(())
    }

    pub fn get(&self, method_name: &str) -> Option<&MethodSignature> {
        self.signatures.get(method_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MethodSignature> {
        self.signatures.values()
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
