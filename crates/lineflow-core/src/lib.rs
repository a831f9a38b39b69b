//! lineflow-core: Motor de progreso para workflows lineales.
//!
//! Una secuencia ordenada de steps nombrados (el registro) más un estado de
//! instancia separado (cursor, historial, timestamps y metadatos por step).
//! El completado se deriva en cada consulta con una regla dual:
//! - posición estrictamente anterior al cursor, o
//! - marca explícita de completado, independiente del cursor.
//!
//! Sólo el estado de instancia se serializa; las definiciones de steps son
//! una plantilla compartida que cada instancia vuelve a registrar.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod model;
pub mod registry;
pub mod step;

pub use engine::{Workflow, WorkflowBuilder};
pub use errors::WorkflowError;
pub use model::{InstanceState, Progress, StepDetail};
pub use registry::StepRegistry;
pub use step::{Step, StepReference};
