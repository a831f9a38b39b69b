//! Estado de instancia: la única entidad persistida.
//!
//! Separación deliberada respecto a las definiciones de steps: el registro
//! (títulos, descripciones, responsables) es una plantilla compartida que
//! rara vez cambia, mientras que este estado es el payload portable de cada
//! ejecución. Muchas instancias en curso pueden compartir un mismo juego de
//! definiciones. Consecuencia: tras `restore`, el cursor/historial/detalles
//! se recuperan pero las definiciones no, hasta que el llamador vuelva a
//! registrarlas.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::detail::StepDetail;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceState {
    /// Nombre del step actual; vacío antes de registrar el primer step.
    #[serde(default)]
    pub current_step_name: String,
    /// Historial de visitas en orden de transición (admite repetidos).
    #[serde(default)]
    pub history: Vec<String>,
    /// Detalles por nombre de step.
    #[serde(default)]
    pub step_details: BTreeMap<String, StepDetail>,
}

impl InstanceState {
    /// Nombre del step actual, o None si todavía no hay ninguno.
    pub fn current(&self) -> Option<&str> {
        if self.current_step_name.is_empty() {
            None
        } else {
            Some(&self.current_step_name)
        }
    }
}
