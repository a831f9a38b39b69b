//! Definiciones relacionadas a Steps.
//!
//! Este módulo define:
//! - `Step`: la definición inmutable de una unidad de la secuencia.
//! - `StepReference`: unión etiquetada nombre-o-handle, resuelta una sola
//!   vez en la frontera del API.

pub mod definition;
pub mod reference;

pub use definition::Step;
pub use reference::StepReference;
