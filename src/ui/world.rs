//! World setup systems for the camera and background

use bevy::prelude::*;

use super::components::{to_bevy_color, MainCamera, SimWorldResource};

/// System to setup the 2D camera and clear color
pub fn setup_world(mut commands: Commands, sim_world: Res<SimWorldResource>) {
    commands.insert_resource(ClearColor(to_bevy_color(sim_world.0.config.background)));
    commands.spawn((MainCamera, Camera2d));
}
