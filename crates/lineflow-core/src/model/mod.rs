//! Modelos del estado por instancia (StepDetail, InstanceState, Progress).

pub mod detail;
pub mod progress;
pub mod state;
pub mod wire;

pub use detail::StepDetail;
pub use progress::Progress;
pub use state::InstanceState;
