//! Resolves the fully-qualified procedure name of a method contract

use procbind_core::{MethodSignature, ProcError, Result};

/// `"{package}.{procedure}"`, where the procedure defaults to the method name
pub fn resolve_procedure_name(signature: &MethodSignature) -> Result<String> {
    let options = signature.options();

    let package = options.package_name.as_deref().ok_or_else(|| {
        ProcError::Configuration(format!(
            "{} has no package/schema name; every procedure contract must declare one",
            signature.method_name()
        ))
    })?;
    let procedure = options
        .procedure_name
        .as_deref()
        .unwrap_or(signature.method_name());

    Ok(format!("{}.{}", package, procedure))
}
