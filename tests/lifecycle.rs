mod common;
use arbor_lib::model::orientation::Orientation;
use arbor_lib::model::state::{DeathCause, Direction, Position, SimEvent, Slot};
use common::{count_events, WorldBuilder};

#[test]
fn test_unlit_plant_starves() {
    let mut world = WorldBuilder::new()
        .without_light_or_death()
        .with_config(|c| c.lifecycle.starvation_ticks = 5)
        .with_plant(&[0b010, 0b000], 10, 10)
        .build();

    let events = world.fast_forward(4);
    assert_eq!(count_events(&events, |e| matches!(e, SimEvent::Died { .. })), 0);
    let events = world.update();
    assert!(events.iter().any(|e| matches!(
        e,
        SimEvent::Died {
            cause: DeathCause::Starvation,
            age: 5,
            ..
        }
    )));
    assert_population!(world, 0);
    assert_eq!(world.metrics().deaths_starvation, 1);
}

#[test]
fn test_lit_plant_outlives_starvation_limit() {
    let mut world = WorldBuilder::new()
        .with_config(|c| {
            c.light.absorption_probability = 1.0;
            c.lifecycle.starvation_ticks = 8;
        })
        .with_plant(&[0b010, 0b010, 0b000], 10, 10)
        .build();
    let id = *world.state.plants.keys().next().unwrap();
    world.fast_forward(40);
    assert!(world.plant(id).is_some());
    assert_eq!(world.metrics().deaths(), 0);
}

#[test]
fn test_growth_blocked_by_neighbour_plant() {
    let mut world = WorldBuilder::new()
        .without_light_or_death()
        .with_plant(&[0b010, 0b000], 10, 10)
        .with_plant(&[0b000], 11, 8)
        .build();
    let events = world.update();
    assert_eq!(
        count_events(&events, |e| matches!(
            e,
            SimEvent::GrowthBlocked { pos, .. } if *pos == Position::new(10, 9)
        )),
        1
    );
    assert_eq!(world.state.grid.occupied_count(), 2);
    assert_plants_separated!(world);
}

#[test]
fn test_planting_next_to_another_plant_is_rejected() {
    let mut world = WorldBuilder::new()
        .without_light_or_death()
        .with_plant(&[0b000], 10, 10)
        .build();

    assert!(world.plant_seed(vec![0b000], Position::new(11, 11)).is_err());
    assert!(world.plant_seed(vec![0b000], Position::new(10, 9)).is_err());
    assert!(world.plant_seed(vec![0b000], Position::new(10, 10)).is_err());
    assert_eq!(world.state.plants.len(), 1);

    world
        .plant_seed(vec![0b000], Position::new(12, 12))
        .expect("two squares away is allowed");
    assert_plants_separated!(world);
}

/// Grows every slot towards the east.
struct EastWind;

impl Orientation for EastWind {
    fn target(&self, _facing: Direction, _slot: Slot) -> Direction {
        Direction::East
    }

    fn child_facing(&self, _facing: Direction, _slot: Slot) -> Direction {
        Direction::East
    }
}

#[test]
fn test_injected_orientation_steers_growth() {
    let mut world = WorldBuilder::new()
        .without_light_or_death()
        .with_config(|c| c.lifecycle.initial_energy = 5.0)
        .with_plant(&[0b010, 0b010, 0b000], 39, 5)
        .build();
    world.set_orientation(Box::new(EastWind));
    world.fast_forward(2);

    let plant = world.state.plants.values().next().unwrap();
    let positions: Vec<Position> = plant.cells.iter().map(|c| c.pos).collect();
    // the grid is 40 wide, so the second cell wraps to column 0
    assert_eq!(
        positions,
        vec![Position::new(39, 5), Position::new(0, 5), Position::new(1, 5)]
    );
}

#[test]
fn test_empty_world_reseeds() {
    let mut world = WorldBuilder::new()
        .with_config(|c| {
            c.world.initial_plants = 4;
            c.lifecycle.starvation_ticks = 3;
            c.light.absorption_probability = 0.0;
        })
        .build();
    assert_population!(world, 4);
    let events = world.fast_forward(3);
    assert_eq!(
        count_events(&events, |e| matches!(e, SimEvent::Reseeded { planted: 4, .. })),
        1
    );
    assert_population!(world, 4);
}
