//! Run-state controller: owns the world, the RNG and the two periodic drivers.
//!
//! ```text
//!   advance(dt) ──> spawn ticker (1.5 s) ──> compute::spawn_pipes
//!               └─> step ticker (1/60 s) ──> compute::tick ──> GameOver? stop both
//!   on_input(Flap)    ──> compute::apply_impulse
//!   on_input(Restart) ──> compute::restart ──> start both
//! ```

use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use crate::clock::Ticker;
use crate::compute;
use crate::config::GameConfig;
use crate::entities::{GameStatus, WorldState};
use crate::input::Command;
use crate::view::{self, Frame};

/// How much work one [`Game::advance`] call performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub ticks: u32,
    pub spawns: u32,
}

pub struct Game<R: Rng> {
    state: WorldState,
    rng: R,
    /// Simulated time since the session started.
    now: Duration,
    step_timer: Ticker,
    spawn_timer: Ticker,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let now = Duration::ZERO;
        Self {
            state: compute::init_state(config),
            rng,
            now,
            step_timer: Ticker::new(config.tick_interval(), now),
            spawn_timer: Ticker::new(config.spawn_interval, now),
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn frame(&self) -> Frame {
        view::snapshot(&self.state)
    }

    pub fn drivers_running(&self) -> bool {
        self.step_timer.is_running() || self.spawn_timer.is_running()
    }

    pub fn on_input(&mut self, command: Command) {
        match command {
            Command::Flap => self.apply_impulse(),
            Command::Restart => self.restart(),
        }
    }

    pub fn apply_impulse(&mut self) {
        self.state = compute::apply_impulse(&self.state);
    }

    pub fn restart(&mut self) {
        if self.state.status != GameStatus::GameOver {
            return;
        }
        self.state = compute::restart(&self.state);
        self.step_timer.start(self.now);
        self.spawn_timer.start(self.now);
        debug!("restarted, high score {}", self.state.high_score);
    }

    /// Run one simulation step; stops both drivers when the run ends.
    pub fn step(&mut self) {
        let was_playing = self.state.status == GameStatus::Playing;
        self.state = compute::tick(&self.state);

        if was_playing && self.state.status == GameStatus::GameOver {
            self.step_timer.stop();
            self.spawn_timer.stop();
            info!(
                "game over: score {}, high score {}",
                self.state.score as u32, self.state.high_score
            );
        }
    }

    pub fn spawn(&mut self) {
        self.state = compute::spawn_pipes(&self.state, &mut self.rng);
        debug!("spawned pipe pair, {} pipes live", self.state.pipes.len());
    }

    /// Move simulated time forward by `dt`, firing every due driver in
    /// chronological order.  A spawn due at the same instant as a tick
    /// fires first.
    pub fn advance(&mut self, dt: Duration) -> Progress {
        let target = self.now + dt;
        let mut progress = Progress::default();

        loop {
            let next = [&self.spawn_timer, &self.step_timer]
                .into_iter()
                .filter(|t| t.is_running())
                .map(|t| t.next_due())
                .min();
            let at = match next {
                Some(at) if at <= target => at,
                _ => break,
            };
            self.now = at;

            if self.spawn_timer.is_due(at) {
                self.spawn_timer.fire();
                self.spawn();
                progress.spawns += 1;
            }
            if self.step_timer.is_due(at) {
                self.step_timer.fire();
                self.step();
                progress.ticks += 1;
            }
        }

        self.now = target;
        progress
    }
}
