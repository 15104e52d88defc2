//! Taxi Simulation Library
//!
//! A top-down taxi game core that can run headless or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
