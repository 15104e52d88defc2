//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{self, Point, SimWorld};

/// Resource wrapper for the simulation world
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for entities spawned from the simulation's draw list
#[derive(Component)]
pub struct SimSynced;

/// Marker for the taxi sprite
#[derive(Component)]
pub struct TaxiSprite;

/// Links a Bevy entity to a customer by index
#[derive(Component)]
pub struct CustomerLink(pub usize);

/// Map size in pixels, used to convert between map and world coordinates
#[derive(Resource, Clone, Copy)]
pub struct MapExtent {
    pub width: f32,
    pub height: f32,
}

impl MapExtent {
    pub fn from_world(world: &SimWorld) -> Self {
        Self {
            width: world.config.map_width as f32,
            height: world.config.map_height as f32,
        }
    }

    /// Map coordinates (origin top-left, y down) to Bevy world space (origin centre, y up)
    pub fn to_world(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x - self.width / 2.0, self.height / 2.0 - y)
    }

    /// Window cursor position to the map point under it
    pub fn cursor_to_map(&self, cursor: Vec2) -> Point {
        Point::new(cursor.x.floor() as i32, cursor.y.floor() as i32)
    }
}

/// Convert a simulation color into a Bevy color
pub fn to_bevy_color(color: simulation::Color) -> Color {
    Color::srgb_u8(color.r, color.g, color.b)
}
