//! Engine-specific adjustments applied to parameters after construction

use procbind_core::{DbParameter, DbType, Engine};
use std::sync::Arc;

/// Scale forced onto SQL Server output decimals
pub const SQL_SERVER_OUTPUT_DECIMAL_SCALE: u8 = 6;

/// A post-construction hook keyed on the target engine.
///
/// The binder runs every adjustment whose [`engine`](Self::engine) matches
/// the collaborator's engine, in registration order, on each parameter the
/// collaborator builds.
pub trait ParameterAdjustment: Send + Sync {
    /// Engine this adjustment applies to
    fn engine(&self) -> Engine;

    /// Short label for logs
    fn name(&self) -> &'static str;

    /// Modify the parameter in place
    fn adjust(&self, param: &mut DbParameter);
}

/// SQL Server rounds output decimals to scale 0 unless told otherwise
#[derive(Debug, Clone, Copy)]
pub struct OutputDecimalScale {
    engine: Engine,
    scale: u8,
}

impl OutputDecimalScale {
    pub fn new(engine: Engine, scale: u8) -> Self {
        Self { engine, scale }
    }

    pub fn sql_server() -> Self {
        Self::new(Engine::SqlServer, SQL_SERVER_OUTPUT_DECIMAL_SCALE)
    }
}

impl ParameterAdjustment for OutputDecimalScale {
    fn engine(&self) -> Engine {
        self.engine
    }

    fn name(&self) -> &'static str {
        "output-decimal-scale"
    }

    fn adjust(&self, param: &mut DbParameter) {
        if param.is_output() && param.db_type == DbType::Decimal {
            param.scale = Some(self.scale);
        }
    }
}

/// The adjustments a default executor starts with
pub fn default_adjustments() -> Vec<Arc<dyn ParameterAdjustment>> {
    vec![Arc::new(OutputDecimalScale::sql_server())]
}

/// Apply every adjustment registered for `engine` to `param`
pub fn apply_adjustments(
    adjustments: &[Arc<dyn ParameterAdjustment>],
    engine: Engine,
    param: &mut DbParameter,
) {
    for adjustment in adjustments.iter().filter(|a| a.engine() == engine) {
        tracing::debug!(
            adjustment = adjustment.name(),
            engine = engine.id(),
            parameter = %param.name,
            "applying parameter adjustment"
        );
        adjustment.adjust(param);
    }
}
