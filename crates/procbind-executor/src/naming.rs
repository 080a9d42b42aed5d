//! Procedure parameter naming convention
//!
//! Parameter names are `<direction><type><Name>`, e.g. `IN_strCustomerName`
//! or `OUT_intStatus`. Either prefix can be switched off per method. When the
//! type token is kept the raw name is capitalised; otherwise it is appended
//! as declared.

use crate::type_map::naming_token;
use procbind_core::{ParamType, ParameterDirection, Result};

pub const IN_DIRECTION: &str = "IN_";
pub const OUT_DIRECTION: &str = "OUT_";

/// Build the name the stored procedure expects for a parameter
pub fn parameter_name(
    direction: ParameterDirection,
    ty: &ParamType,
    raw_name: &str,
    omit_direction: bool,
    omit_type: bool,
) -> Result<String> {
    let mut name = String::with_capacity(raw_name.len() + 8);

    if !omit_direction {
        name.push_str(match direction {
            ParameterDirection::Input => IN_DIRECTION,
            ParameterDirection::Output => OUT_DIRECTION,
        });
    }

    if omit_type {
        name.push_str(raw_name);
    } else {
        name.push_str(naming_token(ty)?);
        push_capitalized(&mut name, raw_name);
    }

    Ok(name)
}

fn push_capitalized(out: &mut String, raw: &str) {
    let mut chars = raw.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
