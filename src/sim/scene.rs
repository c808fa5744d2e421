//! Scene state machine
//!
//! TitleScreen -> Playing -> {LevelWon | GameOver} -> {Playing | TitleScreen},
//! with Credits reachable from the title and Reset available everywhere.

use serde::{Deserialize, Serialize};

use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scene {
    TitleScreen,
    Playing,
    LevelWon,
    GameOver,
    Credits,
}

/// Scene panel the overlay collaborator should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Title,
    /// Announces the level about to start
    LevelReady { level: u32 },
    GameOver,
    Credits,
    /// No panel while playing
    Hidden,
}

impl Scene {
    /// Overlay for this scene given the level that was just played
    pub fn overlay(self, current_level: u32) -> Overlay {
        match self {
            Scene::TitleScreen => Overlay::Title,
            Scene::Playing => Overlay::Hidden,
            Scene::LevelWon => Overlay::LevelReady {
                level: current_level + 1,
            },
            Scene::GameOver => Overlay::GameOver,
            Scene::Credits => Overlay::Credits,
        }
    }
}

/// Host-level commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start / next level / back to title, depending on the scene
    Confirm,
    TogglePause,
    Reset,
    ShowCredits,
}

impl GameState {
    /// Apply a command and return the resulting scene.
    ///
    /// Commands that mean nothing in the current scene are ignored.
    pub fn handle_command(&mut self, command: Command) -> Scene {
        match (command, self.scene) {
            (Command::Reset, _) => self.reset_game(),
            (Command::Confirm, Scene::TitleScreen) => self.start_game(),
            (Command::Confirm, Scene::LevelWon) => self.advance_level(),
            (Command::Confirm, Scene::GameOver) => self.reset_game(),
            (Command::Confirm, Scene::Credits) => self.transition(Scene::TitleScreen),
            (Command::ShowCredits, Scene::TitleScreen) => self.transition(Scene::Credits),
            (Command::TogglePause, Scene::Playing) => self.toggle_pause(),
            (command, scene) => {
                log::debug!("ignoring {:?} in {:?}", command, scene);
            }
        }
        self.scene
    }

    /// Next level: bump the counter and rebuild the field
    pub fn advance_level(&mut self) {
        self.current_level += 1;
        self.start_game();
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.stop_thruster();
        }
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
    }
}
