//! Per-tick phases. Each phase mutates [`SimulationState`](crate::state::SimulationState)
//! and appends the events it caused.

pub mod dispersal;
pub mod growth;
pub mod lifecycle;
pub mod light;
pub mod reproduction;
