//! Implementación central del motor de workflow.
//!
//! Se encarga de:
//! - Mantener el registro de steps y el estado de instancia por separado.
//! - Aplicar las transiciones de cursor con sus efectos: anotar historial,
//!   reiniciar `started` al entrar y estampar `completed` al abandonar un
//!   step distinto.
//! - Derivar completado y progreso en cada consulta, sin caches.
//! - Serializar/restaurar únicamente el estado de instancia.

use chrono::{DateTime, SubsecRound, Utc};
use serde_json::Value;

use crate::engine::WorkflowBuilder;
use crate::errors::WorkflowError;
use crate::model::{InstanceState, Progress, StepDetail};
use crate::registry::StepRegistry;
use crate::step::{Step, StepReference};

/// Motor de progreso sobre una secuencia lineal de steps.
///
/// Valor poseído y no compartido: los mutadores toman `&mut self` y la
/// serialización ante acceso concurrente es responsabilidad del llamador
/// (una instancia por ejecución lógica del workflow).
#[derive(Debug, Default)]
pub struct Workflow {
    registry: StepRegistry,
    state: InstanceState,
}

/// Las marcas de tiempo viajan como RFC3339 de segundos; se truncan al
/// estampar para que snapshot/restore sea exacto.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

impl Workflow {
    pub fn new() -> Self {
        Self { registry: StepRegistry::new(),
               state: InstanceState::default() }
    }

    /// Crea un builder para declarar los steps de forma encadenada.
    #[inline]
    pub fn builder() -> WorkflowBuilder {
        WorkflowBuilder::new()
    }

    /// Registra un step.
    ///
    /// Lógica:
    /// 1. Rechaza nombres duplicados.
    /// 2. Crea un `StepDetail` vacío para el step (pisa el detalle
    ///    restaurado del mismo nombre, si lo hubiera).
    /// 3. Sólo si todavía no hay step actual, el recién registrado pasa a
    ///    serlo, con los efectos de transición habituales.
    pub fn add_step(&mut self, step: Step) -> Result<(), WorkflowError> {
        let name = step.name().to_string();
        self.registry.add(step)?;
        self.state.step_details.insert(name.clone(), StepDetail::default());

        if self.state.current().is_none() {
            self.set_current_step(name.as_str())?;
        }
        Ok(())
    }

    /// Step actual, si hay uno y su definición está registrada. Tras
    /// `restore` devuelve None hasta volver a registrar las definiciones.
    pub fn current_step(&self) -> Option<&Step> {
        self.state.current().and_then(|name| self.registry.get(name))
    }

    /// Nombre del step actual (disponible incluso sin definiciones).
    pub fn current_step_name(&self) -> Option<&str> {
        self.state.current()
    }

    /// Mueve el cursor al step referenciado.
    ///
    /// Lógica:
    /// 1. Resuelve la referencia a un nombre canónico registrado.
    /// 2. Estampa `completed` del step actual al abandonarlo (sólo si el
    ///    destino es distinto).
    /// 3. Fija el nuevo actual, anota el historial (aunque repita la
    ///    entrada anterior) y reinicia su `started`.
    pub fn set_current_step(&mut self, reference: impl Into<StepReference>) -> Result<(), WorkflowError> {
        let name = self.resolve_required(&reference.into())?;
        if self.registry.get(&name).is_none() {
            return Err(WorkflowError::StepNotFound(name));
        }

        if let Some(current) = self.state.current().map(str::to_string) {
            if current != name {
                if let Some(detail) = self.state.step_details.get_mut(&current) {
                    detail.completed = Some(now());
                }
            }
        }

        self.state.current_step_name = name.clone();
        self.state.history.push(name.clone());
        if let Some(detail) = self.state.step_details.get_mut(&name) {
            detail.started = Some(now());
        }
        Ok(())
    }

    /// ¿Es el step referenciado el actual? Una referencia irresoluble es un
    /// miss de consulta, no un error.
    pub fn is_step_current(&self, reference: impl Into<StepReference>) -> bool {
        match self.resolve(&reference.into()) {
            Some(name) => self.state.current() == Some(name.as_str()),
            None => false,
        }
    }

    /// Regla dual de completado, recalculada en cada llamada:
    /// - ordinal estrictamente anterior al del step actual ⇒ completo, con
    ///   o sin marca explícita (mover el cursor hacia atrás "des-completa"
    ///   los steps posteriores sin marca);
    /// - en cualquier otro caso, completo sólo con marca explícita.
    pub fn is_step_complete(&self, reference: impl Into<StepReference>) -> bool {
        match self.resolve(&reference.into()) {
            Some(name) => self.complete_by_name(&name),
            None => false,
        }
    }

    fn complete_by_name(&self, name: &str) -> bool {
        let cursor = self.state.current().and_then(|current| self.registry.position(current));
        if let (Some(pos), Some(cur)) = (self.registry.position(name), cursor) {
            if pos < cur {
                return true;
            }
        }
        // Marca explícita; cubre también nombres restaurados sin definición
        self.state.step_details.get(name)
                               .map(|detail| detail.completed.is_some())
                               .unwrap_or(false)
    }

    /// Marca explícita de completado, independiente del cursor. Devuelve
    /// false si el nombre no tiene detalle (ni registrado ni restaurado).
    pub fn mark_step_completed(&mut self, reference: impl Into<StepReference>) -> bool {
        let name = match self.resolve(&reference.into()) {
            Some(name) => name,
            None => return false,
        };
        match self.state.step_details.get_mut(&name) {
            Some(detail) => {
                detail.completed = Some(now());
                true
            }
            None => false,
        }
    }

    /// Deriva las estadísticas de avance. El porcentaje de un workflow
    /// vacío es 0.0, sin división.
    pub fn progress(&self) -> Progress {
        let total = self.registry.len();
        let completed = self.registry.steps()
                                     .iter()
                                     .filter(|step| self.complete_by_name(step.name()))
                                     .count();
        let current = self.state.current().and_then(|name| self.registry.position(name));
        let percent = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        Progress { total,
                   completed,
                   current,
                   pending: total - completed,
                   percent }
    }

    /// Lee un metadato del step; None si el step o la clave no existen.
    pub fn step_meta(&self, reference: impl Into<StepReference>, key: &str) -> Option<&Value> {
        let name = self.resolve(&reference.into())?;
        self.state.step_details.get(&name)?.meta.get(key)
    }

    /// Escribe un metadato del step. Una referencia mala falla explícito,
    /// igual que el resto de los mutadores.
    pub fn set_step_meta(&mut self,
                         reference: impl Into<StepReference>,
                         key: impl Into<String>,
                         value: Value)
                         -> Result<(), WorkflowError> {
        let name = self.resolve_required(&reference.into())?;
        match self.state.step_details.get_mut(&name) {
            Some(detail) => {
                detail.meta.insert(key.into(), value);
                Ok(())
            }
            None => Err(WorkflowError::StepNotFound(name)),
        }
    }

    /// Serializa únicamente el estado de instancia (nunca el registro).
    pub fn snapshot(&self) -> Result<String, WorkflowError> {
        serde_json::to_string(&self.state).map_err(|e| WorkflowError::Serialization(e.to_string()))
    }

    /// Reemplaza el estado completo a partir de un snapshot. Ante un
    /// payload malformado el estado previo queda intacto.
    pub fn restore(&mut self, payload: &str) -> Result<(), WorkflowError> {
        let state: InstanceState =
            serde_json::from_str(payload).map_err(|e| WorkflowError::Serialization(e.to_string()))?;
        self.state = state;
        Ok(())
    }

    /// Acceso de sólo lectura al estado de instancia.
    pub fn state(&self) -> &InstanceState {
        &self.state
    }

    /// Steps registrados, en orden de registro.
    pub fn steps(&self) -> &[Step] {
        self.registry.steps()
    }

    /// Búsqueda de una definición por nombre.
    pub fn get_step(&self, name: &str) -> Option<&Step> {
        self.registry.get(name)
    }

    /// Historial de visitas en orden de transición.
    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    /// Resuelve una referencia a nombre canónico; None si el handle no
    /// corresponde a ningún step registrado.
    fn resolve(&self, reference: &StepReference) -> Option<String> {
        match reference {
            StepReference::ByName(name) => Some(name.clone()),
            StepReference::ByHandle(id) => self.registry.get_by_id(*id).map(|step| step.name().to_string()),
        }
    }

    /// Variante para mutadores: un handle desconocido es `StepNotFound`.
    fn resolve_required(&self, reference: &StepReference) -> Result<String, WorkflowError> {
        match reference {
            StepReference::ByName(name) => Ok(name.clone()),
            StepReference::ByHandle(id) => {
                self.registry.get_by_id(*id)
                             .map(|step| step.name().to_string())
                             .ok_or_else(|| WorkflowError::StepNotFound(id.to_string()))
            }
        }
    }
}
