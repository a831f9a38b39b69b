//! Registro ordenado de definiciones de steps.
//!
//! Append-only: sin eliminación ni reordenamiento. El orden de registro
//! define el ordinal inmutable que usa la inferencia de completado.

use uuid::Uuid;

use crate::errors::WorkflowError;
use crate::step::Step;

#[derive(Debug, Default)]
pub struct StepRegistry {
    steps: Vec<Step>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Registra un step nuevo al final de la secuencia. Falla si el nombre
    /// ya existe.
    pub fn add(&mut self, step: Step) -> Result<(), WorkflowError> {
        if self.get(step.name()).is_some() {
            return Err(WorkflowError::DuplicateStep(step.name().to_string()));
        }
        self.steps.push(step);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.name() == name)
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<&Step> {
        self.steps.iter().find(|s| s.id() == id)
    }

    /// Ordinal de un nombre en la secuencia de registro.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.name() == name)
    }

    /// Steps en orden de registro.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
