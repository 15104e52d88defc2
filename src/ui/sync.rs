//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{MapExtent, SimWorldResource, TaxiSprite};
use super::spawner::{rect_center, rect_size};

/// System to run one simulation tick per fixed step
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>) {
    if sim_world.0.is_running() {
        sim_world.0.tick();
    }
}

/// System to move and resize the taxi sprite after turns
pub fn sync_taxi(
    sim_world: Res<SimWorldResource>,
    extent: Res<MapExtent>,
    mut taxi_query: Query<(&mut Sprite, &mut Transform), With<TaxiSprite>>,
) {
    let rect = sim_world.0.vehicle.rect();

    for (mut sprite, mut transform) in taxi_query.iter_mut() {
        sprite.custom_size = Some(rect_size(&rect));
        let center = rect_center(&extent, &rect);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
    }
}
