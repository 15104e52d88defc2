//! Standalone taxi simulation module
//!
//! This module contains all the core game logic (movement, collisions,
//! sidewalks, customers and the frame loop) and can run independently of
//! the Bevy game engine. It can be tested via console without needing to
//! open a window.

mod block;
mod config;
mod customer;
mod frame;
mod input;
mod render;
mod sidewalk;
mod types;
mod vehicle;
mod world;

pub use block::{any_collision, find_block, Block};
pub use config::{
    SessionConfig, VehicleConfig, BACKGROUND_COLOR, CUSTOMER_COLOR, CUSTOMER_LIMIT, MAX_CUSTOMERS, MIN_CUSTOMERS,
    SIDEWALK_BAND, SIDEWALK_COLOR,
};
pub use customer::{spawn_customers, Customer};
pub use frame::{run_session, FrameClock, InputSource, ScriptStep, ScriptedInput};
pub use input::{Axis, AxisState, DirectionalInput, InputEvent, Key};
pub use render::{DrawCommand, Layer, NullRenderer, Renderer, TerminalRenderer};
pub use sidewalk::{derive_region, sample_point, SidewalkOverride, SidewalkRegion, SidewalkSpec};
pub use types::{
    BlockId, Color, Edge, LineSegment, Orientation, Point, Rect, DEFAULT_FPS, MAP_HEIGHT,
    MAP_WIDTH,
};
pub use vehicle::{BlockedReason, MoveOutcome, Vehicle};
pub use world::{SessionStats, SimWorld};
