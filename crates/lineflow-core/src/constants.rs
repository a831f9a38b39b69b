//! Constantes del motor.

/// Etiqueta de tipo de un step recién creado. Valores habituales además de
/// "normal": "approval", "notification".
pub const DEFAULT_STEP_KIND: &str = "normal";

/// Responsable por defecto de un step recién creado.
pub const DEFAULT_RESPONSIBLE: &str = "Admin";
