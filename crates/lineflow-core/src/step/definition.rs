//! Definición inmutable de un step del workflow.
//!
//! Un `Step` describe una unidad nombrada de la secuencia lineal: clave
//! única (`name`), etiqueta de tipo (`kind`), textos de presentación y el
//! responsable de completarlo. El motor nunca muta un `Step` después de
//! registrarlo; el estado por-instancia vive aparte (ver `model`).

use uuid::Uuid;

use crate::constants::{DEFAULT_RESPONSIBLE, DEFAULT_STEP_KIND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: Uuid,
    name: String,
    kind: String,
    title: String,
    description: String,
    responsible: String,
}

impl Step {
    /// Crea un step con el nombre dado y el resto de atributos por defecto.
    ///
    /// El nombre es la clave única dentro de un registro; por convención en
    /// snake_case (p.ej. `document_review`).
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(),
               name: name.into(),
               kind: DEFAULT_STEP_KIND.to_string(),
               title: String::new(),
               description: String::new(),
               responsible: DEFAULT_RESPONSIBLE.to_string() }
    }

    /// Cambia la etiqueta de tipo ("normal", "approval", "notification", ...).
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Cambia el nombre de presentación (admite espacios y caracteres
    /// especiales, p.ej. "Document Review").
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Cambia la descripción larga, pensada para UI/documentación.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Cambia el responsable: un rol, un equipo o un identificador de
    /// persona (p.ej. "admin@example.com").
    pub fn with_responsible(mut self, responsible: impl Into<String>) -> Self {
        self.responsible = responsible.into();
        self
    }

    /// Handle opaco del step, usable como `StepReference::ByHandle`.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Clave única dentro del registro.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn responsible(&self) -> &str {
        &self.responsible
    }
}
