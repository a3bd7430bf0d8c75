//! Sound-effect taxonomy and the audio sink interface
//!
//! The engine emits [`GameEvent`]s; an audio backend maps them to effects
//! and plays them. Playback itself is a collaborator concern, so the crate
//! ships only the mapping plus a silent sink for headless runs.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a wall
    WallHit,
    /// Ball hits the paddle
    PaddleHit,
    /// Brick destroyed
    BrickBreak,
    /// Ball fell below the field
    LifeLost,
    /// All bricks cleared
    LevelClear,
    /// Session lost
    GameOver,
    /// Session won
    Victory,
}

/// Map an engine event to the effect a sink should play
pub fn effect_for_event(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::WallBounce => Some(SoundEffect::WallHit),
        GameEvent::PaddleBounce => Some(SoundEffect::PaddleHit),
        GameEvent::BrickBreak { .. } => Some(SoundEffect::BrickBreak),
        GameEvent::LifeLost => Some(SoundEffect::LifeLost),
        GameEvent::LevelCleared { .. } => Some(SoundEffect::LevelClear),
        GameEvent::SessionLost { .. } => Some(SoundEffect::GameOver),
        GameEvent::SessionWon { .. } => Some(SoundEffect::Victory),
    }
}

/// Something that can play sound effects
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);

    /// Forward a batch of engine events
    fn play_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(effect) = effect_for_event(event) {
                self.play(effect);
            }
        }
    }
}

/// Silent sink for headless sessions and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::trace!("audio: {effect:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_maps_to_an_effect() {
        let events = [
            GameEvent::WallBounce,
            GameEvent::PaddleBounce,
            GameEvent::BrickBreak { color: 0, x: 0.0, y: 0.0 },
            GameEvent::LifeLost,
            GameEvent::LevelCleared { level: 1 },
            GameEvent::SessionWon { score: 1 },
            GameEvent::SessionLost { score: 1 },
        ];
        for event in &events {
            assert!(effect_for_event(event).is_some());
        }
    }

    #[test]
    fn test_break_event_maps_to_break_effect() {
        let event = GameEvent::BrickBreak { color: 3, x: 40.0, y: 92.0 };
        assert_eq!(effect_for_event(&event), Some(SoundEffect::BrickBreak));
    }
}
