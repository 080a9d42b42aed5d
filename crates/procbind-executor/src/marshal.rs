//! Converts returned output parameters back into caller-facing values

use procbind_core::{DbParameter, MethodSignature, OutputIndexError, ProcError, Result, Value};

/// Read a boolean that travelled as a 32-bit integer. 0 is false, anything
/// else is true.
pub fn as_bool(value: &Value) -> Result<bool> {
    value.as_i32().map(|v| v != 0).ok_or_else(|| {
        ProcError::TypeMismatch(format!(
            "expected a 32-bit integer for a boolean output, got {}",
            value.kind()
        ))
    })
}

/// Collect the values of the output-direction parameters in bound order.
///
/// Outputs are matched to the signature's declared outputs by position
/// only. Where the declared output is a boolean the integer the procedure
/// returned is turned back into `Value::Bool`.
pub fn marshal_outputs(signature: &MethodSignature, params: &[DbParameter]) -> Result<Vec<Value>> {
    let declared: Vec<_> = signature.outputs().collect();

    params
        .iter()
        .filter(|p| p.is_output())
        .enumerate()
        .map(|(index, param)| -> Result<Value> {
            let descriptor = declared.get(index).ok_or_else(|| ProcError::InvalidOperation {
                message: format!(
                    "the output parameters of {} do not match the stored procedure",
                    signature.method_name()
                ),
                source: Some(OutputIndexError {
                    index,
                    declared: declared.len(),
                }),
            })?;

            if descriptor.ty.is_boolean() {
                as_bool(&param.value).map(Value::Bool)
            } else {
                Ok(param.value.clone())
            }
        })
        .collect()
}
