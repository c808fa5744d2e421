//! Simulation context and events
//!
//! One `GameState` per run. It owns the registry, score, scene and RNG;
//! nothing lives in globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::{Asteroid, Tier};
use super::entity::{EntityTag, Playfield};
use super::registry::Registry;
use super::scene::{Overlay, Scene};
use super::score::Score;
use super::ship::Ship;
use crate::consts::*;

/// Audio triggers emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Start the looping thruster sound
    ThrusterStart,
    /// Stop the looping thruster sound
    ThrusterStop,
    /// One-shot per successful fire
    FireShot,
}

/// Everything the host may want to react to, queued in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Sound(SoundCue),
    Overlay(Overlay),
    AsteroidDestroyed { tier: Tier, points: u64 },
    ShipDestroyed,
    LevelCleared { level: u32 },
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub playfield: Playfield,
    pub registry: Registry,
    pub score: Score,
    pub scene: Scene,
    /// 1-based level, survives scene changes until a reset
    pub current_level: u32,
    /// Asteroids spawned per level number
    pub asteroids_per_level: u32,
    pub paused: bool,
    /// Simulation clock in milliseconds, advanced by each simulated tick
    pub clock_ms: f64,
    /// Simulation ticks since the run started
    pub time_ticks: u64,
    /// Whether the thruster loop is currently playing
    pub thrusting: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// A fresh run sitting on the title screen
    pub fn new(seed: u64, playfield: Playfield) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            playfield,
            registry: Registry::new(),
            score: Score::default(),
            scene: Scene::TitleScreen,
            current_level: 1,
            asteroids_per_level: 1,
            paused: false,
            clock_ms: 0.0,
            time_ticks: 0,
            thrusting: false,
            events: Vec::new(),
        }
    }

    pub fn with_asteroids_per_level(mut self, count: u32) -> Self {
        self.asteroids_per_level = count.clamp(1, MAX_ASTEROIDS_PER_LEVEL);
        self
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take every event queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Credit a bullet hit
    pub fn award(&mut self, tier: Tier) {
        let points = self.score.add_hit(tier);
        self.push_event(GameEvent::AsteroidDestroyed { tier, points });
    }

    /// Silence the thruster loop if it is playing
    pub fn stop_thruster(&mut self) {
        if self.thrusting {
            self.thrusting = false;
            self.push_event(GameEvent::Sound(SoundCue::ThrusterStop));
        }
    }

    /// Ship destroyed: the run ends immediately
    pub fn end_run(&mut self) {
        self.push_event(GameEvent::ShipDestroyed);
        self.stop_thruster();
        self.transition(Scene::GameOver);
    }

    /// Full teardown back to the title screen
    pub fn reset_game(&mut self) {
        self.registry.clear();
        self.score.reset();
        self.current_level = 1;
        self.paused = false;
        self.stop_thruster();
        self.transition(Scene::TitleScreen);
    }

    /// Clear the field, spawn the ship and this level's asteroids, start playing
    pub fn start_game(&mut self) {
        self.registry.clear();
        self.paused = false;
        self.stop_thruster();
        self.registry.spawn(Ship::entity(self.playfield.center()));

        let count = self.level_asteroid_count();
        let forced = self.generate_asteroids(count);
        log::info!(
            "Level {}: {} asteroids ({} placed after exhausting retries)",
            self.current_level,
            count,
            forced
        );
        self.transition(Scene::Playing);
    }

    /// Asteroids to spawn for the current level
    pub fn level_asteroid_count(&self) -> usize {
        self.current_level.saturating_mul(self.asteroids_per_level) as usize
    }

    /// Place `count` large asteroids away from everything already live.
    ///
    /// Each one retries up to `SPAWN_MAX_ATTEMPTS` positions looking for
    /// `SPAWN_SEPARATION_RADII * LARGE_RADIUS` of clearance, then settles for
    /// the last candidate. Returns how many placements hit that cap.
    pub fn generate_asteroids(&mut self, count: usize) -> usize {
        let min_distance = SPAWN_SEPARATION_RADII * ASTEROID_LARGE_RADIUS;
        let mut forced = 0;

        for _ in 0..count {
            let mut position = self.random_position();
            let mut attempts = 1;
            while !self.is_clear(position, min_distance) {
                if attempts >= SPAWN_MAX_ATTEMPTS {
                    log::warn!("asteroid placement gave up after {} attempts", attempts);
                    forced += 1;
                    break;
                }
                position = self.random_position();
                attempts += 1;
            }

            let asteroid = Asteroid::random(&mut self.rng, position, Tier::Large);
            self.registry.spawn(asteroid);
        }
        forced
    }

    /// True iff no asteroid is left, whatever else is alive
    pub fn is_win_condition_met(&self) -> bool {
        self.registry.count_tagged(EntityTag::Asteroid) == 0
    }

    fn random_position(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..self.playfield.width),
            self.rng.random_range(0.0..self.playfield.height),
        )
    }

    fn is_clear(&self, position: Vec2, min_distance: f32) -> bool {
        self.registry
            .iter()
            .all(|e| e.body.position.distance(position) >= min_distance)
    }

    /// Switch scenes and queue the matching overlay
    pub(crate) fn transition(&mut self, next: Scene) {
        if self.scene != next {
            log::info!("Scene {:?} -> {:?}", self.scene, next);
        }
        self.scene = next;
        let overlay = next.overlay(self.current_level);
        self.push_event(GameEvent::Overlay(overlay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::bullet::Bullet;
    use proptest::prelude::*;

    #[test]
    fn test_new_run_defaults() {
        let state = GameState::new(1, Playfield::default());
        assert_eq!(state.scene, Scene::TitleScreen);
        assert_eq!(state.current_level, 1);
        assert_eq!(state.score.value(), 0);
        assert!(state.registry.is_empty());
    }

    #[test]
    fn test_start_game_spawns_ship_and_level_asteroids() {
        let mut state = GameState::new(2, Playfield::default());
        state.current_level = 3;
        state.start_game();

        assert_eq!(state.scene, Scene::Playing);
        assert_eq!(state.registry.count_tagged(EntityTag::Ship), 1);
        assert_eq!(state.registry.count_tagged(EntityTag::Asteroid), 3);
        assert!(state.drain_events().contains(&GameEvent::Overlay(Overlay::Hidden)));
    }

    #[test]
    fn test_win_condition_ignores_ship_and_bullets() {
        let mut state = GameState::new(3, Playfield::default());
        assert!(state.is_win_condition_met());

        state.registry.spawn(Ship::entity(Vec2::new(10.0, 10.0)));
        state.registry.spawn(Bullet::entity(Vec2::new(10.0, 10.0), 0.0));
        assert!(state.is_win_condition_met());

        state.generate_asteroids(1);
        assert!(!state.is_win_condition_met());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = GameState::new(4, Playfield::default());
        state.start_game();
        state.award(Tier::Medium);
        state.current_level = 4;
        state.end_run();
        assert_eq!(state.scene, Scene::GameOver);

        state.reset_game();
        assert_eq!(state.scene, Scene::TitleScreen);
        assert_eq!(state.score.value(), 0);
        assert_eq!(state.current_level, 1);
        assert!(state.registry.is_empty());
    }

    #[test]
    fn test_level_count_saturates() {
        let mut state = GameState::new(6, Playfield::default()).with_asteroids_per_level(u32::MAX);
        assert_eq!(state.asteroids_per_level, MAX_ASTEROIDS_PER_LEVEL);

        state.current_level = 2;
        assert_eq!(state.level_asteroid_count(), 2 * MAX_ASTEROIDS_PER_LEVEL as usize);

        state.asteroids_per_level = u32::MAX;
        state.current_level = u32::MAX;
        assert_eq!(state.level_asteroid_count(), u32::MAX as usize);
    }

    #[test]
    fn test_placement_gives_up_on_crowded_field() {
        // Too small to fit two asteroids 200px apart
        let mut state = GameState::new(5, Playfield::new(100.0, 100.0));
        let forced = state.generate_asteroids(2);
        assert_eq!(forced, 1);
        assert_eq!(state.registry.count_tagged(EntityTag::Asteroid), 2);
    }

    proptest! {
        #[test]
        fn seeded_placement_separates_or_reports(seed in any::<u64>()) {
            let mut state = GameState::new(seed, Playfield::default());
            let forced = state.generate_asteroids(DEFAULT_ASTEROID_COUNT);
            prop_assert_eq!(state.registry.len(), DEFAULT_ASTEROID_COUNT);

            let positions: Vec<Vec2> = state.registry.iter().map(|e| e.body.position).collect();
            let min = SPAWN_SEPARATION_RADII * ASTEROID_LARGE_RADIUS;
            let separated = positions.iter().enumerate().all(|(i, a)| {
                positions[i + 1..].iter().all(|b| a.distance(*b) >= min)
            });
            prop_assert!(separated || forced > 0);
        }

        #[test]
        fn level_asteroids_keep_clear_of_ship(seed in 0u64..500) {
            let mut state = GameState::new(seed, Playfield::default());
            state.current_level = 3;
            let ship = state.playfield.center();
            state.registry.spawn(Ship::entity(ship));
            let forced = state.generate_asteroids(state.level_asteroid_count());

            let min = SPAWN_SEPARATION_RADII * ASTEROID_LARGE_RADIUS;
            let clear = state.registry.asteroids().all(|a| a.body.position.distance(ship) >= min);
            prop_assert_eq!(state.registry.count_tagged(EntityTag::Asteroid), 3);
            prop_assert!(clear || forced > 0);
        }
    }
}
