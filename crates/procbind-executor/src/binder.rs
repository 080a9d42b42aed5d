//! Builds the bound parameter list for a procedure call

use crate::adjust::{ParameterAdjustment, apply_adjustments};
use crate::naming::parameter_name;
use crate::type_map::map_db_type;
use procbind_core::{Database, DbParameter, MethodSignature, ParamType, ProcError, Result, Value};
use std::sync::Arc;

/// Convert a call-site argument into the value bound for a declared type.
///
/// Booleans become `Int32` 1 or 0; NULL and every other type pass through.
/// The caller's argument is never modified.
pub fn bind_argument(ty: &ParamType, arg: &Value) -> Result<Value> {
    match (ty, arg) {
        (ParamType::Boolean, Value::Bool(b)) => Ok(Value::Int32(i32::from(*b))),
        (ParamType::Boolean, Value::Null) => Ok(Value::Null),
        (ParamType::Boolean, other) => Err(ProcError::TypeMismatch(format!(
            "boolean parameter received a {} argument",
            other.kind()
        ))),
        (_, other) => Ok(other.clone()),
    }
}

/// Bind every declared parameter of `signature` against `args`.
///
/// Transaction parameters are skipped and consume no argument. Input
/// parameters take the call-site arguments in order; output parameters are
/// bound without a value. Each parameter is built by the collaborator and
/// then passed through the adjustments registered for its engine.
pub fn bind_parameters(
    signature: &MethodSignature,
    db: &dyn Database,
    args: &[Value],
    adjustments: &[Arc<dyn ParameterAdjustment>],
) -> Result<Vec<DbParameter>> {
    let options = signature.options();
    let engine = db.engine();
    let mut params = Vec::with_capacity(signature.parameters().len());
    let mut input_index = 0;

    for descriptor in signature.parameters() {
        if descriptor.is_transaction() {
            continue;
        }

        let direction = descriptor.direction;
        let name = parameter_name(
            direction,
            &descriptor.ty,
            &descriptor.name,
            options.omit_direction,
            options.omit_type,
        )?;
        let db_type = map_db_type(&descriptor.ty)?;

        let value = if direction.is_input() {
            let arg = args.get(input_index).ok_or_else(|| {
                ProcError::invalid_operation(format!(
                    "no argument supplied for input parameter {} of {} (position {})",
                    descriptor.name,
                    signature.method_name(),
                    input_index
                ))
            })?;
            input_index += 1;
            Some(bind_argument(&descriptor.ty, arg)?)
        } else {
            None
        };

        let mut param = db.create_parameter(&name, db_type, value, direction)?;
        apply_adjustments(adjustments, engine, &mut param);
        params.push(param);
    }

    if args.len() > input_index {
        tracing::warn!(
            method = signature.method_name(),
            supplied = args.len(),
            declared = input_index,
            "ignoring surplus call-site arguments"
        );
    }

    Ok(params)
}
