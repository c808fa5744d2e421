//! Audio triggers
//!
//! The simulation only queues cues; a sink turns them into sound. Nothing
//! here waits on playback.

use crate::sim::{GameEvent, SoundCue};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Engine loop, plays while thrust is held
    Thruster,
    /// One shot per bullet fired
    FireShot,
}

/// Playback backend
pub trait AudioSink {
    /// Start an effect. Looping effects keep going until `stop`.
    fn play(&mut self, effect: SoundEffect, volume: f32);
    fn stop(&mut self, effect: SoundEffect);
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Act on one cue
    pub fn handle(&mut self, cue: SoundCue) {
        match cue {
            // Stops always go through so a mute mid-loop cannot leave it running
            SoundCue::ThrusterStop => self.sink.stop(SoundEffect::Thruster),
            SoundCue::ThrusterStart => self.play(SoundEffect::Thruster),
            SoundCue::FireShot => self.play(SoundEffect::FireShot),
        }
    }

    /// Play every sound cue among `events`, ignoring the rest
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            if let GameEvent::Sound(cue) = event {
                self.handle(*cue);
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(effect, vol);
    }
}

/// Sink that only logs, for headless hosts
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("audio: play {:?} at {:.2}", effect, volume);
    }

    fn stop(&mut self, effect: SoundEffect) {
        log::debug!("audio: stop {:?}", effect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(SoundEffect, bool)>,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, _volume: f32) {
            self.calls.push((effect, true));
        }

        fn stop(&mut self, effect: SoundEffect) {
            self.calls.push((effect, false));
        }
    }

    #[test]
    fn test_dispatch_filters_sound_events() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.dispatch(&[
            GameEvent::Sound(SoundCue::ThrusterStart),
            GameEvent::ShipDestroyed,
            GameEvent::Sound(SoundCue::FireShot),
            GameEvent::Sound(SoundCue::ThrusterStop),
        ]);
        assert_eq!(
            audio.sink().calls,
            vec![
                (SoundEffect::Thruster, true),
                (SoundEffect::FireShot, true),
                (SoundEffect::Thruster, false),
            ]
        );
    }

    #[test]
    fn test_muted_still_stops_loops() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.set_muted(true);
        audio.handle(SoundCue::FireShot);
        audio.handle(SoundCue::ThrusterStop);
        assert_eq!(audio.sink().calls, vec![(SoundEffect::Thruster, false)]);
    }
}
