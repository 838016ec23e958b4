//! Input sampling for the first-person controller.
//!
//! Window events arrive whenever the OS delivers them; the simulation only
//! looks at input once per tick. [`InputState`] latches button edges and
//! accumulates mouse motion between ticks, and [`InputSampler::sample`] hands
//! the tick a single [`InputSnapshot`] and clears the per-tick edges.

use glam::Vec2;
use std::collections::HashSet;

/// Press/release edges of one button since the last sample, plus its current level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonLatch {
    /// A press arrived since the last sample.
    pub pressed: bool,
    /// A release arrived since the last sample.
    pub released: bool,
    /// Button is down right now.
    pub held: bool,
}

impl ButtonLatch {
    /// A button that went down this tick and is still down.
    pub fn press() -> Self {
        Self { pressed: true, released: false, held: true }
    }

    /// A button that went up this tick.
    pub fn release() -> Self {
        Self { pressed: false, released: true, held: false }
    }

    /// A button that is down with no new edge.
    pub fn hold() -> Self {
        Self { pressed: false, released: false, held: true }
    }
}

/// Everything one controller tick reads from input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// Movement axes: x = strafe (right positive), y = forward/back (forward positive).
    pub movement: Vec2,
    /// Look delta since the last sample: x = right positive, y = up positive.
    pub look_delta: Vec2,
    /// Jump was pressed since the last sample.
    pub jump_pressed: bool,
    /// Fire button edges and level.
    pub fire: ButtonLatch,
}

/// Pull interface the simulation uses to read one tick of input.
pub trait InputSampler {
    fn sample(&mut self) -> InputSnapshot;
}

/// Manages raw input state between ticks.
#[derive(Debug, Default)]
pub struct InputState {
    /// Keys currently held down.
    keys_held: HashSet<KeyCode>,
    /// Keys pressed since the last sample.
    keys_pressed: HashSet<KeyCode>,

    /// Mouse buttons currently held.
    mouse_held: HashSet<MouseButton>,
    /// Mouse buttons pressed since the last sample.
    mouse_pressed: HashSet<MouseButton>,
    /// Mouse buttons released since the last sample.
    mouse_released: HashSet<MouseButton>,

    /// Accumulated mouse delta in window coordinates (y down).
    accumulated_delta: Vec2,

    /// Whether the cursor is captured/locked.
    cursor_locked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.keys_held.contains(&key) {
                    self.keys_pressed.insert(key);
                }
                self.keys_held.insert(key);
            }
            ElementState::Released => {
                self.keys_held.remove(&key);
            }
        }
    }

    /// Process a mouse button event.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if !self.mouse_held.contains(&button) {
                    self.mouse_pressed.insert(button);
                }
                self.mouse_held.insert(button);
            }
            ElementState::Released => {
                if self.mouse_held.remove(&button) {
                    self.mouse_released.insert(button);
                }
            }
        }
    }

    /// Process raw mouse movement (device delta, y down).
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        self.accumulated_delta.x += delta.0 as f32;
        self.accumulated_delta.y += delta.1 as f32;
    }

    /// Set cursor lock state. Look input is only sampled while locked.
    pub fn set_cursor_locked(&mut self, locked: bool) {
        self.cursor_locked = locked;
        log::debug!("cursor locked: {}", locked);
    }

    /// Check if a key is currently held.
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Movement input from WASD. Opposing keys cancel; diagonals are left
    /// unnormalized for the locomotion step to handle.
    pub fn movement_input(&self) -> Vec2 {
        let mut movement = Vec2::ZERO;

        if self.is_key_held(KeyCode::KeyW) {
            movement.y += 1.0;
        }
        if self.is_key_held(KeyCode::KeyS) {
            movement.y -= 1.0;
        }
        if self.is_key_held(KeyCode::KeyA) {
            movement.x -= 1.0;
        }
        if self.is_key_held(KeyCode::KeyD) {
            movement.x += 1.0;
        }

        movement
    }

    fn fire_latch(&self) -> ButtonLatch {
        ButtonLatch {
            pressed: self.mouse_pressed.contains(&MouseButton::Left),
            released: self.mouse_released.contains(&MouseButton::Left),
            held: self.mouse_held.contains(&MouseButton::Left),
        }
    }
}

impl InputSampler for InputState {
    fn sample(&mut self) -> InputSnapshot {
        let look_delta = if self.cursor_locked {
            Vec2::new(self.accumulated_delta.x, -self.accumulated_delta.y)
        } else {
            Vec2::ZERO
        };

        let snapshot = InputSnapshot {
            movement: self.movement_input(),
            look_delta,
            jump_pressed: self.keys_pressed.contains(&KeyCode::Space),
            fire: self.fire_latch(),
        };

        self.keys_pressed.clear();
        self.mouse_pressed.clear();
        self.mouse_released.clear();
        self.accumulated_delta = Vec2::ZERO;

        snapshot
    }
}

// Re-export for convenience
pub use winit::event::{ElementState, MouseButton};
pub use winit::keyboard::KeyCode;
