//! Detalle por-step del estado de instancia.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wire;

/// Registro mutable asociado a cada step registrado: timestamps y metadatos
/// arbitrarios. Se crea vacío al registrar el step y nunca se elimina.
///
/// En la carga serializada los timestamps viajan como RFC3339 o string
/// vacío ("sin valor"); ver `wire::rfc3339_opt`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDetail {
    /// Momento en que el step pasó a ser el actual (None = aún no iniciado).
    #[serde(with = "wire::rfc3339_opt", default)]
    pub started: Option<DateTime<Utc>>,
    /// Momento del completado explícito (None = sin marca explícita).
    #[serde(with = "wire::rfc3339_opt", default)]
    pub completed: Option<DateTime<Utc>>,
    /// Metadatos clave → JSON. El orden de inserción es irrelevante;
    /// BTreeMap mantiene el payload serializado con claves ordenadas.
    #[serde(default)]
    pub meta: BTreeMap<String, Value>,
}
