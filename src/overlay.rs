//! Scene overlay collaborator
//!
//! One `show` per scene transition. Layout and styling are the host's business.

use crate::sim::{GameEvent, Overlay};

pub trait OverlaySink {
    fn show(&mut self, overlay: Overlay);
}

/// Forward every overlay change among `events`, returning the last one shown
pub fn dispatch_overlays(sink: &mut impl OverlaySink, events: &[GameEvent]) -> Option<Overlay> {
    let mut last = None;
    for event in events {
        if let GameEvent::Overlay(overlay) = event {
            sink.show(*overlay);
            last = Some(*overlay);
        }
    }
    last
}

/// Text for a panel, for hosts without a UI layer
pub fn overlay_text(overlay: Overlay) -> String {
    match overlay {
        Overlay::Title => "ROCK ARENA - press Enter".to_string(),
        Overlay::LevelReady { level } => format!("Level {} ready - press Enter", level),
        Overlay::GameOver => "GAME OVER - press Enter".to_string(),
        Overlay::Credits => "Credits - press Enter".to_string(),
        Overlay::Hidden => String::new(),
    }
}

/// Sink that logs panel changes
#[derive(Debug, Default)]
pub struct LogOverlay {
    pub current: Option<Overlay>,
}

impl OverlaySink for LogOverlay {
    fn show(&mut self, overlay: Overlay) {
        if overlay != Overlay::Hidden {
            log::info!("overlay: {}", overlay_text(overlay));
        }
        self.current = Some(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Command, GameState, Playfield};

    #[test]
    fn test_start_hides_panels() {
        let mut state = GameState::new(1, Playfield::default());
        state.handle_command(Command::Confirm);

        let mut sink = LogOverlay::default();
        let last = dispatch_overlays(&mut sink, &state.drain_events());
        assert_eq!(last, Some(Overlay::Hidden));
        assert_eq!(sink.current, Some(Overlay::Hidden));
    }

    #[test]
    fn test_level_ready_text_has_number() {
        assert_eq!(
            overlay_text(Overlay::LevelReady { level: 4 }),
            "Level 4 ready - press Enter"
        );
    }
}
