//! # Arbor Core
//!
//! The deterministic simulation engine for Arbor, an artificial-life model of
//! plants growing on a toroidal grid.
//!
//! This crate contains:
//! - The genome codec (flat bytes to ternary gene trees) and mutation
//! - The occupancy grid and facing rules
//! - Per-tick phases: growth, light capture and transport, reproduction,
//!   seed dispersal and death
//! - Configuration, metrics and structured logging
//!
//! ## Architecture
//!
//! All mutable state lives in one [`SimulationState`]. Each phase in
//! [`systems`] takes it by `&mut` and appends the [`SimEvent`]s it caused.
//! Plants are kept in id order and every random draw comes from one seeded
//! `ChaCha8Rng`, so a seed and a configuration fully determine a run.
//!
//! ## Example
//!
//! ```
//! use arbor_core::genome;
//!
//! let tree = genome::decode(&[0b010, 0b010, 0b000]).unwrap();
//! assert_eq!(tree.len(), 3);
//! assert_eq!(genome::encode(&tree), vec![0b010, 0b010, 0b000]);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Genome decoding errors
pub mod error;
/// Genome codec and mutation
pub mod genome;
/// Toroidal occupancy grid
pub mod grid;
/// Running counters and structured logging
pub mod metrics;
/// Facing rules for child cells
pub mod orientation;
/// Render views, statistics and digests
pub mod snapshot;
/// The mutable simulation state
pub mod state;
/// Per-tick phases
pub mod systems;

pub use arbor_data::SimEvent;
pub use config::SimConfig;
pub use error::GenomeError;
pub use grid::{Occupant, OccupancyGrid};
pub use metrics::{init_logging, Metrics};
pub use orientation::Orientation;
pub use state::SimulationState;
