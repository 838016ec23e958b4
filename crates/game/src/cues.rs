//! Presentation cues fired alongside each shot.
//!
//! Sounds are looked up by name once, when the actor is built; the per-shot
//! path only plays an already resolved id. Cues are fire-and-forget.

use std::collections::HashMap;

use crate::error::SetupError;

/// Animation trigger raised on every shot.
pub const SHOOT_TRIGGER: &str = "Shoot";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

/// Resource provider for sound effects.
pub trait SoundBank {
    fn sound(&self, name: &str) -> Option<SoundId>;
}

/// Receiver for audio and animation notifications.
pub trait CueSink {
    fn play_sound(&mut self, sound: SoundId, volume: f32);
    fn trigger_animation(&mut self, trigger: &'static str);
}

/// Name to id table of loaded sounds.
#[derive(Debug, Default)]
pub struct SoundTable {
    ids: HashMap<String, SoundId>,
}

impl SoundTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sound name, returning its id. Registering twice returns the same id.
    pub fn register(&mut self, name: &str) -> SoundId {
        let next = SoundId(self.ids.len() as u32);
        *self.ids.entry(name.to_string()).or_insert(next)
    }
}

impl SoundBank for SoundTable {
    fn sound(&self, name: &str) -> Option<SoundId> {
        self.ids.get(name).copied()
    }
}

/// The cue an actor emits per shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotCue {
    sound: SoundId,
    volume: f32,
}

impl ShotCue {
    pub fn resolve(bank: &impl SoundBank, name: &str, volume: f32) -> Result<Self, SetupError> {
        let sound = bank
            .sound(name)
            .ok_or_else(|| SetupError::MissingSound(name.to_string()))?;
        Ok(Self { sound, volume })
    }

    pub fn play(&self, sink: &mut impl CueSink) {
        sink.play_sound(self.sound, self.volume);
        sink.trigger_animation(SHOOT_TRIGGER);
    }
}

/// Cue sink for headless runs: logs every cue and counts them.
#[derive(Debug, Default)]
pub struct LogCues {
    pub sounds_played: u32,
    pub animations_triggered: u32,
}

impl CueSink for LogCues {
    fn play_sound(&mut self, sound: SoundId, volume: f32) {
        self.sounds_played += 1;
        log::debug!("play sound {:?} at volume {:.2}", sound, volume);
    }

    fn trigger_animation(&mut self, trigger: &'static str) {
        self.animations_triggered += 1;
        log::debug!("animation trigger {}", trigger);
    }
}
