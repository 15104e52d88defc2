//! Systems for spawning visual entities from simulation state
//!
//! The simulation's draw list is replayed once at startup. Draw order becomes
//! z order, so later commands are drawn on top.

use bevy::prelude::*;

use super::components::{
    to_bevy_color, CustomerLink, MapExtent, SimSynced, SimWorldResource, TaxiSprite,
};
use crate::simulation::{DrawCommand, Layer, Rect};

const Z_STEP: f32 = 0.01;

/// System to create visual entities for the whole scene
pub fn spawn_initial_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    sim_world: Res<SimWorldResource>,
    extent: Res<MapExtent>,
) {
    let frame = sim_world.0.frame();
    let mut customer_index = 0;

    for (order, command) in frame.iter().enumerate() {
        let z = order as f32 * Z_STEP;

        match *command {
            // Handled by ClearColor
            DrawCommand::Clear(_) => {}
            DrawCommand::FillRect { rect, color, layer } => {
                let sprite = (
                    SimSynced,
                    Sprite::from_color(to_bevy_color(color), rect_size(&rect)),
                    Transform::from_translation(rect_center(&extent, &rect).extend(z)),
                );
                match layer {
                    Layer::Vehicle => {
                        commands.spawn((sprite, TaxiSprite));
                    }
                    Layer::Block | Layer::Sidewalk => {
                        commands.spawn(sprite);
                    }
                }
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                let position = extent.to_world(center.x as f32, center.y as f32);
                commands.spawn((
                    SimSynced,
                    CustomerLink(customer_index),
                    Mesh2d(meshes.add(Circle::new(radius as f32))),
                    MeshMaterial2d(materials.add(to_bevy_color(color))),
                    Transform::from_translation(position.extend(z)),
                ));
                customer_index += 1;
            }
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => {
                let start = extent.to_world(from.x as f32, from.y as f32);
                let end = extent.to_world(to.x as f32, to.y as f32);
                let along = end - start;
                let midpoint = (start + end) / 2.0;

                commands.spawn((
                    SimSynced,
                    Sprite::from_color(
                        to_bevy_color(color),
                        Vec2::new(along.length().max(1.0), width as f32),
                    ),
                    Transform::from_translation(midpoint.extend(z))
                        .with_rotation(Quat::from_rotation_z(along.y.atan2(along.x))),
                ));
            }
        }
    }
}

pub(super) fn rect_size(rect: &Rect) -> Vec2 {
    Vec2::new(rect.width as f32, rect.height as f32)
}

pub(super) fn rect_center(extent: &MapExtent, rect: &Rect) -> Vec2 {
    extent.to_world(
        rect.x as f32 + rect.width as f32 / 2.0,
        rect.y as f32 + rect.height as f32 / 2.0,
    )
}
