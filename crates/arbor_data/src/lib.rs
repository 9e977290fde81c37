//! Core data structures for the Arbor simulation.
//!
//! Everything in this crate is plain data: positions, gene trees, cells,
//! plants and the transient entities that move between them. The rules that
//! operate on these types live in `arbor_core`.

pub mod data;

pub use data::cell::{Cell, CellIdx, CellKind, PlantId};
pub use data::event::{DeathCause, SimEvent};
pub use data::genome::{GeneNode, GeneTree, NodeIdx, MASK_BITS};
pub use data::geometry::{Direction, Position, Slot};
pub use data::plant::{FrontierEntry, Plant, ReproPhase};
pub use data::transport::{LightParticle, SeedState, TravelingSeed};
pub use data::view::{CellView, PhaseKind, PlantStats, WorldStats};
