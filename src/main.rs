//! Rock Arena entry point
//!
//! Headless native host: runs the fixed-step loop with a scripted pilot and
//! routes sound and overlay events to logging sinks.
//!
//! Usage: `rock-arena [settings.json] [max_frames]`

use std::time::{SystemTime, UNIX_EPOCH};

use rock_arena::audio::{AudioManager, LogAudio};
use rock_arena::consts::SIM_DT;
use rock_arena::overlay::{LogOverlay, dispatch_overlays};
use rock_arena::platform::KeyState;
use rock_arena::renderer::frame_geometry;
use rock_arena::sim::{Command, GameState, RenderFrame, Scene, TickInput, TickOutcome, tick};
use rock_arena::Settings;

const DEFAULT_MAX_FRAMES: u64 = 60 * 60;

/// Host-side wiring around one run
struct Game {
    state: GameState,
    audio: AudioManager<LogAudio>,
    overlay: LogOverlay,
    keys: KeyState,
}

impl Game {
    fn new(settings: &Settings, seed: u64) -> Self {
        let mut audio = AudioManager::new(LogAudio);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        Self {
            state: settings.new_game(seed),
            audio,
            overlay: LogOverlay::default(),
            keys: KeyState::default(),
        }
    }

    fn command(&mut self, command: Command) -> Scene {
        let scene = self.state.handle_command(command);
        self.flush_events();
        scene
    }

    fn flush_events(&mut self) {
        let events = self.state.drain_events();
        self.audio.dispatch(&events);
        dispatch_overlays(&mut self.overlay, &events);
    }

    /// Spin and shoot, with a little thrust now and then
    fn pilot(&mut self, frame: u64) -> TickInput {
        if frame == 0 {
            self.keys.key_down("ArrowLeft");
            self.keys.key_down("Space");
        }
        match frame % 180 {
            0 => {
                self.keys.key_down("ArrowUp");
            }
            20 => self.keys.key_up("ArrowUp"),
            _ => {}
        }
        self.keys.tick_input()
    }

    fn run(&mut self, max_frames: u64) {
        self.command(Command::Confirm);

        for frame in 0..max_frames {
            let input = self.pilot(frame);
            let outcome = tick(&mut self.state, &input, SIM_DT);
            self.flush_events();

            if frame % 60 == 0 {
                let geometry = frame_geometry(&RenderFrame::capture(&self.state));
                log::debug!(
                    "frame {}: {} entities, {} line verts, {} tri verts, clear {:?}",
                    frame,
                    self.state.registry.len(),
                    geometry.lines.len(),
                    geometry.triangles.len(),
                    geometry.clear_color
                );
            }

            match outcome {
                TickOutcome::Continue | TickOutcome::Idle => {}
                TickOutcome::Transition(Scene::LevelWon) => {
                    self.command(Command::Confirm);
                }
                TickOutcome::Transition(scene) => {
                    log::info!("Run stopped in {:?} after {} frames", scene, frame + 1);
                    self.keys.clear();
                    break;
                }
            }
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Rock Arena (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let max_frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let clock_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut game = Game::new(&settings, clock_seed);
    game.run(max_frames);

    println!(
        "Final scene: {:?}, level {}, score {}",
        game.state.scene,
        game.state.current_level,
        game.state.score.value()
    );
}
