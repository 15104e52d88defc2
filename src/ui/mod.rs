//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization and input - all game logic is in
//! the `simulation` module. The UI reads state from `SimWorld` and renders it
//! with Bevy's 2D sprites and meshes.

mod components;
mod input;
pub mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{MapExtent, SimWorldResource};

use crate::simulation::SimWorld;
use input::{handle_driving_keys, handle_mouse_click, handle_quit};
use spawner::spawn_initial_visuals;
use sync::{sync_taxi, tick_simulation};
use world::setup_world;

/// Plugin to register all UI systems for a prepared session
pub struct TaxiUIPlugin {
    world: SimWorld,
}

impl TaxiUIPlugin {
    pub fn new(world: SimWorld) -> Self {
        Self { world }
    }
}

impl Plugin for TaxiUIPlugin {
    fn build(&self, app: &mut App) {
        let fps = self.world.config.fps.max(1);

        app.insert_resource(MapExtent::from_world(&self.world))
            .insert_resource(SimWorldResource(self.world.clone()))
            .insert_resource(Time::<Fixed>::from_hz(fps as f64))
            .add_systems(
                Startup,
                (setup_world, spawn_initial_visuals.after(setup_world)),
            )
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_driving_keys,
                    handle_mouse_click,
                    handle_quit,
                    sync_taxi,
                ),
            );
    }
}
