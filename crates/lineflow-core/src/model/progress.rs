//! Estadísticas agregadas de avance.

use serde::Serialize;

/// Fotografía derivada del avance del workflow. Nunca se cachea: se
/// recalcula en cada consulta a partir de (ordinal, marca explícita), de
/// modo que mover el cursor hacia atrás se refleja sin invalidaciones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progress {
    /// Cantidad de steps registrados.
    pub total: usize,
    /// Steps completos según la regla dual (posición o marca explícita).
    pub completed: usize,
    /// Ordinal del step actual (None si no hay step actual).
    pub current: Option<usize>,
    /// `total - completed`.
    pub pending: usize,
    /// Porcentaje completado; 0.0 para un workflow vacío.
    pub percent: f64,
}
