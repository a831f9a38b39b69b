//! Referencia polimórfica a un step: por nombre o por handle.
//!
//! Unión etiquetada en lugar de un parámetro dinámico: el motor la resuelve
//! una sola vez a un nombre canónico. Una forma no soportada (un número, un
//! arreglo) sólo puede aparecer al construir la referencia desde JSON
//! dinámico, y falla ahí con `UnsupportedReference`.

use serde_json::Value;
use uuid::Uuid;

use crate::errors::WorkflowError;
use crate::step::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepReference {
    /// Referencia por clave única del step.
    ByName(String),
    /// Referencia por handle opaco de un `Step` ya construido.
    ByHandle(Uuid),
}

impl StepReference {
    /// Construye una referencia desde un valor JSON dinámico.
    ///
    /// Acepta un string (nombre) o un objeto `{"id": "<uuid>"}` (handle).
    /// Cualquier otra forma falla con `UnsupportedReference`.
    pub fn from_value(value: &Value) -> Result<Self, WorkflowError> {
        match value {
            Value::String(name) => Ok(StepReference::ByName(name.clone())),
            Value::Object(fields) => fields.get("id")
                                           .and_then(Value::as_str)
                                           .and_then(|raw| Uuid::parse_str(raw).ok())
                                           .map(StepReference::ByHandle)
                                           .ok_or_else(|| WorkflowError::UnsupportedReference(value.to_string())),
            other => Err(WorkflowError::UnsupportedReference(other.to_string())),
        }
    }
}

impl From<&str> for StepReference {
    fn from(name: &str) -> Self {
        StepReference::ByName(name.to_string())
    }
}

impl From<String> for StepReference {
    fn from(name: String) -> Self {
        StepReference::ByName(name)
    }
}

impl From<&Step> for StepReference {
    fn from(step: &Step) -> Self {
        StepReference::ByHandle(step.id())
    }
}
