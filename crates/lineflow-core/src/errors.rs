//! Errores del motor de workflow (simples por ahora).
//!
//! Política de propagación: registro y transiciones de cursor fallan
//! explícitamente; las consultas (`is_step_current`, `is_step_complete`,
//! `step_meta`) degradan a false/None ante referencias irresolubles.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum WorkflowError {
    #[error("step already exists: {0}")] DuplicateStep(String),
    #[error("step not found: {0}")] StepNotFound(String),
    #[error("unsupported step reference: {0}")] UnsupportedReference(String),
    #[error("state serialization failed: {0}")] Serialization(String),
}
