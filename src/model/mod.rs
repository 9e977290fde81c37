pub use arbor_core::{init_logging, Metrics, Orientation, SimulationState};
pub mod config {
    pub use arbor_core::config::*;
}
pub mod genome {
    pub use arbor_core::genome::*;
}
pub mod grid {
    pub use arbor_core::grid::*;
}
pub mod orientation {
    pub use arbor_core::orientation::*;
}
pub mod snapshot {
    pub use arbor_core::snapshot::*;
}
pub mod systems {
    pub use arbor_core::systems::*;
}

pub mod world;

pub mod state {
    pub use arbor_data::*;
}
