//! Main simulation world that ties everything together
//!
//! `SimWorld` is the session: it owns the map, the taxi, the customers, the
//! live input state and the random source. Front ends feed it input events,
//! call `tick` once per frame and draw whatever `frame` returns.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::block::{any_collision, Block};
use super::config::SessionConfig;
use super::customer::{spawn_customers, Customer};
use super::input::{DirectionalInput, InputEvent};
use super::render::{DrawCommand, Layer};
use super::sidewalk::SidewalkRegion;
use super::types::{BlockId, Rect};
use super::vehicle::{MoveOutcome, Vehicle};

/// Counters collected over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub moves: u64,
    pub turns: u64,
    pub blocked: u64,
    /// Ticks on which the taxi ended up overlapping a block
    pub collisions: u64,
}

/// The main simulation world
#[derive(Clone)]
pub struct SimWorld {
    /// Data the session was built from
    pub config: SessionConfig,

    /// Static obstacles
    pub blocks: Vec<Block>,

    /// Resolved sidewalk strips
    pub sidewalks: Vec<SidewalkRegion>,

    /// Customers placed at session start
    pub customers: Vec<Customer>,

    /// The player's taxi
    pub vehicle: Vehicle,

    /// Standing directional input
    pub input: DirectionalInput,

    /// Number of ticks run so far
    pub ticks: u64,

    pub stats: SessionStats,

    running: bool,

    rng: StdRng,
}

impl SimWorld {
    fn new_internal(config: SessionConfig, mut rng: StdRng) -> Result<Self> {
        config.validate().context("Invalid session configuration")?;

        let blocks: Vec<Block> = config
            .blocks
            .iter()
            .enumerate()
            .map(|(index, rect)| Block::new(BlockId(index), *rect, config.block_color))
            .collect();

        let sidewalks: Vec<SidewalkRegion> = config
            .sidewalks
            .iter()
            .map(|spec| SidewalkRegion::resolve(spec, &blocks, config.sidewalk_color))
            .collect();

        let customers = spawn_customers(
            &mut rng,
            config.customer_range.clone(),
            &sidewalks,
            config.customer_radius,
            config.customer_color,
        );

        let v = &config.vehicle;
        let vehicle = Vehicle::new(v.x, v.y, v.width, v.height, v.orientation, v.speed);

        if let Some(block_id) = any_collision(&vehicle.rect(), &blocks) {
            warn!("Taxi starts inside block {:?}", block_id.0);
        }

        info!(
            "Session ready: {} blocks, {} sidewalks, {} customers",
            blocks.len(),
            sidewalks.len(),
            customers.len()
        );

        Ok(Self {
            config,
            blocks,
            sidewalks,
            customers,
            vehicle,
            input: DirectionalInput::new(),
            ticks: 0,
            stats: SessionStats::default(),
            running: true,
            rng,
        })
    }

    /// Create a session with an OS-seeded random source
    pub fn new(config: SessionConfig) -> Result<Self> {
        Self::new_internal(config, StdRng::from_os_rng())
    }

    /// Create a session with a seeded RNG for reproducible customer placement
    pub fn new_with_seed(config: SessionConfig, seed: u64) -> Result<Self> {
        Self::new_internal(config, StdRng::seed_from_u64(seed))
    }

    /// Create a session on the built-in map
    pub fn create_default_world() -> Result<Self> {
        Self::new(SessionConfig::default())
    }

    /// Create a session on the built-in map with a seeded RNG
    pub fn create_default_world_with_seed(seed: u64) -> Result<Self> {
        Self::new_with_seed(SessionConfig::default(), seed)
    }

    /// Throw away the current customers and place a fresh set
    pub fn respawn_customers(&mut self) {
        self.customers = spawn_customers(
            &mut self.rng,
            self.config.customer_range.clone(),
            &self.sidewalks,
            self.config.customer_radius,
            self.config.customer_color,
        );
        debug!("Respawned {} customers", self.customers.len());
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Apply one input event to the session
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => self.input.press(key),
            InputEvent::KeyUp(key) => self.input.release(key),
            InputEvent::Click(point) => info!("Mouse clicked at: ({}, {})", point.x, point.y),
            InputEvent::Quit => {
                info!("Quit requested after {} ticks", self.ticks);
                self.quit();
            }
        }
    }

    /// Advance the session by one frame: one movement request plus the collision check
    pub fn tick(&mut self) -> MoveOutcome {
        self.ticks += 1;

        let (dx, dy) = self.input.delta(self.vehicle.speed);
        let outcome = self.vehicle.try_move(
            dx,
            dy,
            &self.blocks,
            self.config.map_width,
            self.config.map_height,
        );

        match outcome {
            MoveOutcome::Idle => {}
            MoveOutcome::Moved => self.stats.moves += 1,
            MoveOutcome::Turned => self.stats.turns += 1,
            MoveOutcome::Blocked(_) => self.stats.blocked += 1,
        }

        if let Some(block_id) = self.colliding_block() {
            self.stats.collisions += 1;
            warn!(
                "Collision detected! Taxi at ({}, {}) overlaps block {:?}",
                self.vehicle.x, self.vehicle.y, block_id.0
            );
        }

        outcome
    }

    /// The block the taxi currently overlaps, if any
    pub fn colliding_block(&self) -> Option<BlockId> {
        any_collision(&self.vehicle.rect(), &self.blocks)
    }

    pub fn any_collision(&self) -> bool {
        self.colliding_block().is_some()
    }

    /// Draw calls for the current state, back to front
    pub fn frame(&self) -> Vec<DrawCommand> {
        let mut frame = Vec::with_capacity(
            2 + self.blocks.len() + self.sidewalks.len() + self.customers.len() + self.config.lines.len(),
        );

        frame.push(DrawCommand::Clear(self.config.background));

        frame.extend(self.blocks.iter().map(|block| DrawCommand::FillRect {
            rect: block.rect,
            color: block.color,
            layer: Layer::Block,
        }));

        frame.extend(
            self.sidewalks
                .iter()
                .filter(|sidewalk| sidewalk.is_usable())
                .map(|sidewalk| DrawCommand::FillRect {
                    rect: sidewalk.rect,
                    color: sidewalk.color,
                    layer: Layer::Sidewalk,
                }),
        );

        frame.extend(self.customers.iter().map(|customer| DrawCommand::FillCircle {
            center: customer.center,
            radius: customer.radius,
            color: customer.color,
        }));

        frame.extend(self.config.lines.iter().map(|line| DrawCommand::Line {
            from: line.from,
            to: line.to,
            color: line.color,
            width: line.width,
        }));

        frame.push(DrawCommand::FillRect {
            rect: self.vehicle.rect(),
            color: self.config.vehicle.color,
            layer: Layer::Vehicle,
        });

        frame
    }

    /// Rectangle covering the whole map
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.config.map_width, self.config.map_height)
    }

    /// Print a summary of the session state
    pub fn print_summary(&self) {
        println!("=== Taxi Session Summary ===");
        println!("Ticks: {}", self.ticks);
        println!(
            "Map: {}x{}, Blocks: {}, Sidewalks: {}",
            self.config.map_width,
            self.config.map_height,
            self.blocks.len(),
            self.sidewalks.len()
        );
        println!(
            "Taxi: position=({}, {}), size={}x{}, orientation={:?}",
            self.vehicle.x,
            self.vehicle.y,
            self.vehicle.width,
            self.vehicle.height,
            self.vehicle.orientation
        );
        println!(
            "Moves: {}, Turns: {}, Blocked: {}, Collisions: {}",
            self.stats.moves, self.stats.turns, self.stats.blocked, self.stats.collisions
        );

        println!("--- Customers ({}) ---", self.customers.len());
        for customer in &self.customers {
            println!("  Customer at ({}, {})", customer.center.x, customer.center.y);
        }
    }
}
