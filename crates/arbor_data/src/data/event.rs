use super::cell::PlantId;
use super::geometry::Position;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    OldAge,
    Starvation,
}

/// Discrete simulation events, emitted in the order they happen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum SimEvent {
    Grew {
        plant: PlantId,
        pos: Position,
        tick: u64,
    },
    GrowthBlocked {
        plant: PlantId,
        pos: Position,
        tick: u64,
    },
    Absorbed {
        plant: PlantId,
        pos: Position,
        quantum: f64,
        tick: u64,
    },
    LightDelivered {
        plant: PlantId,
        energy: f64,
        steps: u32,
        tick: u64,
    },
    ChargingStarted {
        plant: PlantId,
        child_len: usize,
        mutated: bool,
        tick: u64,
    },
    SeedReleased {
        plant: PlantId,
        cost: f64,
        tick: u64,
    },
    Germinated {
        plant: PlantId,
        lineage: Uuid,
        generation: u32,
        pos: Position,
        tick: u64,
    },
    GerminationFailed {
        pos: Position,
        tick: u64,
    },
    Died {
        plant: PlantId,
        age: u64,
        cells: usize,
        cause: DeathCause,
        tick: u64,
    },
    Reseeded {
        planted: usize,
        requested: usize,
        tick: u64,
    },
}

impl SimEvent {
    pub fn tick(&self) -> u64 {
        match self {
            SimEvent::Grew { tick, .. }
            | SimEvent::GrowthBlocked { tick, .. }
            | SimEvent::Absorbed { tick, .. }
            | SimEvent::LightDelivered { tick, .. }
            | SimEvent::ChargingStarted { tick, .. }
            | SimEvent::SeedReleased { tick, .. }
            | SimEvent::Germinated { tick, .. }
            | SimEvent::GerminationFailed { tick, .. }
            | SimEvent::Died { tick, .. }
            | SimEvent::Reseeded { tick, .. } => *tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_is_tagged() {
        let event = SimEvent::Died {
            plant: PlantId(7),
            age: 40,
            cells: 3,
            cause: DeathCause::Starvation,
            tick: 99,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"Died\""));
        assert!(json.contains("Starvation"));

        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.tick(), 99);
    }
}
