//! Session configuration
//!
//! Everything here is replaceable data: map size, pacing, colors and the
//! manifests for blocks, sidewalks and road markings. `Default` holds the
//! built-in city map.

use anyhow::{ensure, Result};
use std::ops::RangeInclusive;

use super::sidewalk::{SidewalkOverride, SidewalkSpec};
use super::types::{Color, LineSegment, Orientation, Point, Rect, DEFAULT_FPS, MAP_HEIGHT, MAP_WIDTH};

/// Background color of the map
pub const BACKGROUND_COLOR: Color = Color::rgb(72, 115, 146);

/// Color used for sidewalks
pub const SIDEWALK_COLOR: Color = Color::rgb(170, 170, 170);

/// Color used for customers
pub const CUSTOMER_COLOR: Color = Color::rgb(0, 200, 0);

/// Default thickness of a sidewalk strip
pub const SIDEWALK_BAND: i32 = 10;

/// Customer count bounds for a session (inclusive)
pub const MIN_CUSTOMERS: usize = 1;
pub const MAX_CUSTOMERS: usize = 10;

/// Upper limit accepted for a configured customer range
pub const CUSTOMER_LIMIT: usize = 10_000;

/// Starting placement of the taxi
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub orientation: Orientation,
    pub speed: i32,
    pub color: Color,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            x: 4,
            y: 9,
            width: 12,
            height: 21,
            orientation: Orientation::Vertical,
            speed: 5,
            color: Color::RED,
        }
    }
}

/// All data needed to set up a session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub map_width: i32,
    pub map_height: i32,
    pub fps: u32,
    pub background: Color,
    pub block_color: Color,
    pub blocks: Vec<Rect>,
    pub sidewalk_color: Color,
    pub sidewalks: Vec<SidewalkSpec>,
    pub lines: Vec<LineSegment>,
    pub vehicle: VehicleConfig,
    pub customer_range: RangeInclusive<usize>,
    pub customer_radius: i32,
    pub customer_color: Color,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            fps: DEFAULT_FPS,
            background: BACKGROUND_COLOR,
            block_color: Color::BLACK,
            blocks: default_blocks(),
            sidewalk_color: SIDEWALK_COLOR,
            sidewalks: default_sidewalks(),
            lines: default_lines(),
            vehicle: VehicleConfig::default(),
            customer_range: MIN_CUSTOMERS..=MAX_CUSTOMERS,
            customer_radius: 6,
            customer_color: CUSTOMER_COLOR,
        }
    }
}

impl SessionConfig {
    /// An empty map of the given size, useful for tests and custom layouts
    pub fn empty(map_width: i32, map_height: i32) -> Self {
        Self {
            map_width,
            map_height,
            blocks: Vec::new(),
            sidewalks: Vec::new(),
            lines: Vec::new(),
            ..Self::default()
        }
    }

    /// Check the configuration for values the session cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.map_width > 0 && self.map_height > 0,
            "Map size must be positive, got {}x{}",
            self.map_width,
            self.map_height
        );
        ensure!(self.fps > 0, "Frame rate must be positive");
        ensure!(
            !self.customer_range.is_empty(),
            "Customer range {}..={} is empty",
            self.customer_range.start(),
            self.customer_range.end()
        );
        ensure!(
            *self.customer_range.end() <= CUSTOMER_LIMIT,
            "Customer range upper bound {} exceeds the limit of {}",
            self.customer_range.end(),
            CUSTOMER_LIMIT
        );
        ensure!(self.customer_radius > 0, "Customer radius must be positive");

        for (index, rect) in self.blocks.iter().enumerate() {
            ensure!(
                rect.width > 0 && rect.height > 0,
                "Block {} has non-positive size {}x{}",
                index,
                rect.width,
                rect.height
            );
        }

        let v = &self.vehicle;
        ensure!(
            v.width > 0 && v.height > 0,
            "Vehicle size must be positive, got {}x{}",
            v.width,
            v.height
        );
        ensure!(v.speed > 0, "Vehicle speed must be positive");
        ensure!(
            Rect::new(v.x, v.y, v.width, v.height).within_bounds(self.map_width, self.map_height),
            "Vehicle start ({}, {}) is outside the {}x{} map",
            v.x,
            v.y,
            self.map_width,
            self.map_height
        );

        Ok(())
    }
}

fn default_blocks() -> Vec<Rect> {
    vec![
        Rect::new(50, 0, 200, 100),
        Rect::new(300, 0, 100, 100),
        Rect::new(450, 50, 200, 200),
        Rect::new(700, 0, 100, 200),
        Rect::new(0, 150, 150, 50),
        Rect::new(200, 150, 100, 200),
        Rect::new(150, 250, 100, 100),
        Rect::new(0, 250, 100, 100),
        Rect::new(350, 150, 50, 100),
        Rect::new(350, 300, 150, 100),
        Rect::new(550, 300, 150, 100),
        Rect::new(750, 250, 50, 100),
        Rect::new(50, 400, 100, 200),
        Rect::new(150, 400, 150, 100),
        Rect::new(350, 450, 150, 100),
        Rect::new(550, 450, 150, 100),
        Rect::new(200, 550, 100, 50),
        Rect::new(700, 400, 50, 150),
    ]
}

fn default_sidewalks() -> Vec<SidewalkSpec> {
    vec![
        SidewalkSpec::new(0, "bottom", SIDEWALK_BAND),
        SidewalkSpec::new(1, "bottom", SIDEWALK_BAND),
        SidewalkSpec::new(2, "left", SIDEWALK_BAND),
        SidewalkSpec::new(2, "bottom", SIDEWALK_BAND),
        SidewalkSpec::new(3, "left", SIDEWALK_BAND),
        SidewalkSpec::new(4, "bottom", SIDEWALK_BAND),
        SidewalkSpec::new(5, "left", SIDEWALK_BAND),
        // Blocks 5 and 6 form an L; run one strip under both
        SidewalkSpec::new(6, "bottom", SIDEWALK_BAND).with_override(SidewalkOverride {
            width: Some(150),
            height: None,
            origin: Some(Point::new(150, 340)),
        }),
        SidewalkSpec::new(7, "top", SIDEWALK_BAND),
        SidewalkSpec::new(9, "top", SIDEWALK_BAND),
        SidewalkSpec::new(10, "top", SIDEWALK_BAND),
        SidewalkSpec::new(12, "right", SIDEWALK_BAND),
        SidewalkSpec::new(13, "top", SIDEWALK_BAND),
        SidewalkSpec::new(14, "top", SIDEWALK_BAND),
        SidewalkSpec::new(15, "top", SIDEWALK_BAND),
        SidewalkSpec::new(17, "left", SIDEWALK_BAND),
    ]
}

fn default_lines() -> Vec<LineSegment> {
    const SEGMENTS: [((i32, i32), (i32, i32)); 33] = [
        ((25, 25), (25, 100)),
        ((25, 125), (150, 125)),
        ((175, 150), (175, 225)),
        ((25, 225), (100, 225)),
        ((125, 250), (125, 350)),
        ((50, 375), (300, 375)),
        ((25, 400), (25, 575)),
        ((325, 400), (325, 500)),
        ((325, 150), (325, 250)),
        ((350, 275), (400, 275)),
        ((425, 150), (425, 250)),
        ((400, 125), (350, 125)),
        ((275, 25), (275, 100)),
        ((200, 125), (300, 125)),
        ((425, 100), (425, 50)),
        ((450, 25), (650, 25)),
        ((675, 200), (675, 25)),
        ((450, 275), (500, 275)),
        ((675, 275), (550, 275)),
        ((325, 300), (325, 350)),
        ((350, 425), (500, 425)),
        ((525, 400), (525, 300)),
        ((675, 425), (550, 425)),
        ((300, 525), (175, 525)),
        ((175, 525), (175, 575)),
        ((325, 575), (500, 575)),
        ((525, 450), (525, 550)),
        ((550, 575), (750, 575)),
        ((775, 375), (775, 550)),
        ((725, 375), (775, 375)),
        ((725, 250), (725, 350)),
        ((675, 225), (775, 225)),
        ((325, 550), (325, 575)),
    ];

    SEGMENTS
        .iter()
        .map(|&(from, to)| LineSegment::new(from, to, Color::YELLOW, 2))
        .collect()
}
