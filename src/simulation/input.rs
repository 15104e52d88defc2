//! Directional input state
//!
//! Key presses and releases are folded into two independent axis registers.
//! The taxi reads a single exclusive delta from them every tick, so a held
//! key keeps driving until it is released.

/// A directional key. WASD aliases are mapped onto these by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

/// Axis a key acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// What a single axis register currently holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisState {
    #[default]
    None,
    Negative,
    Positive,
}

impl AxisState {
    pub fn sign(self) -> i32 {
        match self {
            AxisState::None => 0,
            AxisState::Negative => -1,
            AxisState::Positive => 1,
        }
    }
}

impl Key {
    pub fn axis(self) -> Axis {
        match self {
            Key::Up | Key::Down => Axis::Y,
            Key::Left | Key::Right => Axis::X,
        }
    }

    fn direction(self) -> AxisState {
        match self {
            Key::Up | Key::Left => AxisState::Negative,
            Key::Down | Key::Right => AxisState::Positive,
        }
    }
}

/// Events delivered by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer click in map coordinates; logged only
    Click(super::types::Point),
    Quit,
}

/// Two-register directional state, last-pressed axis wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectionalInput {
    pub x: AxisState,
    pub y: AxisState,
    last_axis: Option<Axis>,
}

impl DirectionalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        *self.register_mut(key.axis()) = key.direction();
        self.last_axis = Some(key.axis());
    }

    /// Clear the register of the released key's axis
    pub fn release(&mut self, key: Key) {
        *self.register_mut(key.axis()) = AxisState::None;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The single movement delta for this tick, scaled by `speed`
    pub fn delta(&self, speed: i32) -> (i32, i32) {
        let preferred = self.last_axis.unwrap_or(Axis::Y);
        let other = match preferred {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        };

        for axis in [preferred, other] {
            let sign = self.register(axis).sign();
            if sign != 0 {
                return match axis {
                    Axis::X => (sign * speed, 0),
                    Axis::Y => (0, sign * speed),
                };
            }
        }
        (0, 0)
    }

    fn register(&self, axis: Axis) -> AxisState {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn register_mut(&mut self, axis: Axis) -> &mut AxisState {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}
