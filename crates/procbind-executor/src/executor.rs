//! Entry points that turn a method contract into a stored-procedure call

use crate::adjust::{ParameterAdjustment, default_adjustments};
use crate::binder::bind_parameters;
use crate::locator::resolve_procedure_name;
use crate::marshal::marshal_outputs;
use procbind_core::{
    DataReader, DataSet, Database, DbParameter, MethodSignature, Result, Transaction, Value,
};
use std::sync::Arc;

/// A resolved procedure call, ready to hand to a collaborator.
///
/// The transaction, when there is one, is passed alongside the invocation
/// by the `execute_*` entry points and is not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Fully-qualified procedure name ("PACKAGE.Procedure")
    pub procedure: String,
    /// Bound parameters in declaration order
    pub parameters: Vec<DbParameter>,
}

/// Executes method contracts against a [`Database`].
///
/// The executor holds no per-call state; one instance can serve any number
/// of contracts and collaborators.
#[derive(Clone)]
pub struct ProcedureExecutor {
    adjustments: Vec<Arc<dyn ParameterAdjustment>>,
}

impl std::fmt::Debug for ProcedureExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProcedureExecutor")
            .field(
                "adjustments",
                &self.adjustments.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for ProcedureExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcedureExecutor {
    /// Create an executor with the built-in engine adjustments
    pub fn new() -> Self {
        Self {
            adjustments: default_adjustments(),
        }
    }

    /// Create an executor that leaves collaborator-built parameters untouched
    pub fn without_adjustments() -> Self {
        Self {
            adjustments: Vec::new(),
        }
    }

    /// Register an additional post-construction adjustment
    pub fn with_adjustment(mut self, adjustment: impl ParameterAdjustment + 'static) -> Self {
        self.adjustments.push(Arc::new(adjustment));
        self
    }

    pub fn adjustments(&self) -> &[Arc<dyn ParameterAdjustment>] {
        &self.adjustments
    }

    /// Resolve the procedure name and bind the parameters without running
    /// anything
    pub fn prepare(
        &self,
        signature: &MethodSignature,
        db: &dyn Database,
        args: &[Value],
    ) -> Result<Invocation> {
        let procedure = resolve_procedure_name(signature)?;
        let parameters = bind_parameters(signature, db, args, &self.adjustments)?;
        tracing::debug!(
            procedure = %procedure,
            engine = db.engine().id(),
            parameters = parameters.len(),
            "prepared procedure invocation"
        );
        Ok(Invocation {
            procedure,
            parameters,
        })
    }

    /// Run a procedure that returns no rows.
    ///
    /// Returns the values of the output parameters in declaration order,
    /// with integer-encoded booleans converted back to `Value::Bool`.
    #[tracing::instrument(
        skip_all,
        fields(method = %signature.method_name(), procedure = tracing::field::Empty)
    )]
    pub async fn execute_non_query(
        &self,
        signature: &MethodSignature,
        db: &dyn Database,
        transaction: Option<&dyn Transaction>,
        args: &[Value],
    ) -> Result<Vec<Value>> {
        let Invocation {
            procedure,
            mut parameters,
        } = self.prepare(signature, db, args)?;
        tracing::Span::current().record("procedure", procedure.as_str());

        match transaction {
            Some(tx) => db.execute_non_query_in(&procedure, &mut parameters, tx).await?,
            None => db.execute_non_query(&procedure, &mut parameters).await?,
        }

        let outputs = marshal_outputs(signature, &parameters)?;
        tracing::debug!(outputs = outputs.len(), "non-query completed");
        Ok(outputs)
    }

    /// Run a procedure and return every result set it produced
    #[tracing::instrument(
        skip_all,
        fields(method = %signature.method_name(), procedure = tracing::field::Empty)
    )]
    pub async fn execute_data_set(
        &self,
        signature: &MethodSignature,
        db: &dyn Database,
        transaction: Option<&dyn Transaction>,
        args: &[Value],
    ) -> Result<DataSet> {
        let Invocation {
            procedure,
            mut parameters,
        } = self.prepare(signature, db, args)?;
        tracing::Span::current().record("procedure", procedure.as_str());

        let data_set = match transaction {
            Some(tx) => db.execute_data_set_in(&procedure, &mut parameters, tx).await?,
            None => db.execute_data_set(&procedure, &mut parameters).await?,
        };
        tracing::debug!(tables = data_set.tables.len(), "data set completed");
        Ok(data_set)
    }

    /// Run a procedure and return an open reader over its rows.
    ///
    /// The caller owns the reader and must close it.
    #[tracing::instrument(
        skip_all,
        fields(method = %signature.method_name(), procedure = tracing::field::Empty)
    )]
    pub async fn execute_data_reader(
        &self,
        signature: &MethodSignature,
        db: &dyn Database,
        transaction: Option<&dyn Transaction>,
        args: &[Value],
    ) -> Result<Box<dyn DataReader>> {
        let Invocation {
            procedure,
            mut parameters,
        } = self.prepare(signature, db, args)?;
        tracing::Span::current().record("procedure", procedure.as_str());

        match transaction {
            Some(tx) => db.execute_data_reader_in(&procedure, &mut parameters, tx).await,
            None => db.execute_data_reader(&procedure, &mut parameters).await,
        }
    }

    /// Run a procedure and return the single value it produced
    #[tracing::instrument(
        skip_all,
        fields(method = %signature.method_name(), procedure = tracing::field::Empty)
    )]
    pub async fn execute_scalar(
        &self,
        signature: &MethodSignature,
        db: &dyn Database,
        transaction: Option<&dyn Transaction>,
        args: &[Value],
    ) -> Result<Value> {
        let Invocation {
            procedure,
            mut parameters,
        } = self.prepare(signature, db, args)?;
        tracing::Span::current().record("procedure", procedure.as_str());

        match transaction {
            Some(tx) => db.execute_scalar_in(&procedure, &mut parameters, tx).await,
            None => db.execute_scalar(&procedure, &mut parameters).await,
        }
    }
}
