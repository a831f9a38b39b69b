//! Builder para `Workflow`.
//!
//! Acumula declaraciones de steps y los registra en orden al construir.
//! Los errores de registro (nombres duplicados) se difieren a `build()`,
//! de modo que la declaración se pueda encadenar sin `?` intermedios.
//!
//! ```
//! use lineflow_core::{Step, Workflow};
//!
//! let wf = Workflow::builder().step(Step::new("draft").with_title("Draft"))
//!                             .step(Step::new("review").with_kind("approval"))
//!                             .build()
//!                             .unwrap();
//! assert_eq!(wf.current_step_name(), Some("draft"));
//! ```

use crate::engine::Workflow;
use crate::errors::WorkflowError;
use crate::step::Step;

#[derive(Debug, Default)]
pub struct WorkflowBuilder {
    steps: Vec<Step>,
}

impl WorkflowBuilder {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Añade la siguiente definición de la secuencia.
    ///
    /// Consume y devuelve el builder para permitir el encadenado.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Registra los steps declarados y devuelve el motor listo. El primer
    /// step declarado queda como actual.
    pub fn build(self) -> Result<Workflow, WorkflowError> {
        let mut workflow = Workflow::new();
        for step in self.steps {
            workflow.add_step(step)?;
        }
        Ok(workflow)
    }
}
