//! Input handling systems
//!
//! Keyboard and mouse state is translated into simulation input events.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{MapExtent, SimWorldResource};
use crate::simulation::{InputEvent, Key};

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowUp | KeyCode::KeyW => Some(Key::Up),
        KeyCode::ArrowDown | KeyCode::KeyS => Some(Key::Down),
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Key::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Key::Right),
        _ => None,
    }
}

/// Feed directional key presses and releases into the session
pub fn handle_driving_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    for code in keyboard.get_just_pressed() {
        if let Some(key) = map_key(*code) {
            sim_world.0.handle_event(InputEvent::KeyDown(key));
        }
    }
    for code in keyboard.get_just_released() {
        if let Some(key) = map_key(*code) {
            sim_world.0.handle_event(InputEvent::KeyUp(key));
        }
    }
}

/// Log left clicks in map coordinates
pub fn handle_mouse_click(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    extent: Res<MapExtent>,
    mut sim_world: ResMut<SimWorldResource>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    if let Some(cursor) = window.cursor_position() {
        let point = extent.cursor_to_map(cursor);
        sim_world.0.handle_event(InputEvent::Click(point));
    }
}

/// Escape quits; so does a session that stopped running
pub fn handle_quit(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        sim_world.0.handle_event(InputEvent::Quit);
    }
    if !sim_world.0.is_running() {
        exit.write(AppExit::Success);
    }
}
