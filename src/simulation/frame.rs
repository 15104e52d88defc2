//! Fixed-timestep frame loop
//!
//! Each iteration drains pending input, applies one movement request,
//! renders the scene and then waits for the next frame boundary.

use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::collections::VecDeque;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

use super::input::{InputEvent, Key};
use super::render::Renderer;
use super::world::SimWorld;

/// Source of input events, polled once per frame
pub trait InputSource {
    /// All events that arrived since the last poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// One step of a scripted drive: hold `key` for `frames` frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptStep {
    pub key: Key,
    pub frames: u32,
}

/// Deterministic input that replays a script, then quits
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    steps: VecDeque<ScriptStep>,
    current: Option<(Key, u32)>,
    finished: bool,
}

impl ScriptedInput {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self {
            steps: steps.into(),
            current: None,
            finished: false,
        }
    }
}

impl FromStr for ScriptedInput {
    type Err = anyhow::Error;

    /// Parse a script like `"down*20,right*30,up"` (frame count defaults to 1)
    fn from_str(s: &str) -> Result<Self> {
        let mut steps = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, frames) = match part.split_once('*') {
                Some((name, count)) => {
                    let frames = count
                        .trim()
                        .parse::<u32>()
                        .with_context(|| format!("Invalid frame count in step '{}'", part))?;
                    (name.trim(), frames)
                }
                None => (part, 1),
            };

            let key = match name.to_ascii_lowercase().as_str() {
                "up" | "w" => Key::Up,
                "down" | "s" => Key::Down,
                "left" | "a" => Key::Left,
                "right" | "d" => Key::Right,
                other => bail!("Unknown key '{}' in script step '{}'", other, part),
            };
            steps.push(ScriptStep { key, frames });
        }
        Ok(Self::new(steps))
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.finished {
            return events;
        }

        if let Some((key, remaining)) = self.current.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                events.push(InputEvent::KeyUp(*key));
                self.current = None;
            } else {
                return events;
            }
        }

        // Zero-length steps only tap the key
        while let Some(step) = self.steps.pop_front() {
            events.push(InputEvent::KeyDown(step.key));
            if step.frames > 0 {
                self.current = Some((step.key, step.frames));
                return events;
            }
            events.push(InputEvent::KeyUp(step.key));
        }

        events.push(InputEvent::Quit);
        self.finished = true;
        events
    }
}

/// Paces the loop to a fixed frame rate
#[derive(Debug)]
pub struct FrameClock {
    period: Option<Duration>,
    next_frame: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Some(Duration::from_secs_f64(1.0 / fps.max(1) as f64)),
            next_frame: Instant::now(),
        }
    }

    /// A clock that never waits
    pub fn unpaced() -> Self {
        Self {
            period: None,
            next_frame: Instant::now(),
        }
    }

    /// Block until the next frame boundary
    pub fn wait(&mut self) {
        let Some(period) = self.period else {
            return;
        };
        self.next_frame += period;
        let now = Instant::now();
        if self.next_frame > now {
            thread::sleep(self.next_frame - now);
        } else {
            // Running behind; don't try to catch up
            self.next_frame = now;
        }
    }
}

/// Run the session until it quits or `max_ticks` frames have been played.
///
/// Returns the number of frames run.
pub fn run_session<I, R>(
    world: &mut SimWorld,
    input: &mut I,
    renderer: &mut R,
    clock: &mut FrameClock,
    max_ticks: Option<u64>,
) -> Result<u64>
where
    I: InputSource + ?Sized,
    R: Renderer + ?Sized,
{
    let mut frames = 0;

    while world.is_running() {
        if max_ticks.is_some_and(|max| frames >= max) {
            debug!("Tick limit reached");
            break;
        }

        for event in input.poll() {
            world.handle_event(event);
        }
        if !world.is_running() {
            break;
        }

        world.tick();
        renderer
            .present(&world.frame())
            .context("Failed to render frame")?;
        frames += 1;

        clock.wait();
    }

    info!("Session ended after {} frames", frames);
    Ok(frames)
}
