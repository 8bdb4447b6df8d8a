/// Gameplay constants.  All distances are world units (the original panel's
/// pixels), velocities are units per tick.

use std::time::Duration;

pub const FIELD_WIDTH: i32 = 360;
pub const FIELD_HEIGHT: i32 = 640;

pub const BIRD_WIDTH: i32 = 34;
pub const BIRD_HEIGHT: i32 = 24;

pub const PIPE_WIDTH: i32 = 64;
pub const PIPE_HEIGHT: i32 = 512;

pub const GRAVITY: i32 = 1;
pub const FLAP_VELOCITY: i32 = -9;
/// Pipes scroll left; equivalent to the bird flying right.
pub const PIPE_VELOCITY: i32 = -4;

pub const TICK_RATE_HZ: u32 = 60;
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,
    pub bird_width: i32,
    pub bird_height: i32,
    pub pipe_width: i32,
    pub pipe_height: i32,
    /// Natural top-aligned y of a top pipe before the random offset.
    pub pipe_baseline: i32,
    pub gravity: i32,
    pub flap_velocity: i32,
    pub pipe_velocity: i32,
    pub tick_rate_hz: u32,
    pub spawn_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_baseline: 0,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            pipe_velocity: PIPE_VELOCITY,
            tick_rate_hz: TICK_RATE_HZ,
            spawn_interval: SPAWN_INTERVAL,
        }
    }
}

impl GameConfig {
    /// Vertical gap between the two pipes of a pair.
    pub fn opening_space(&self) -> i32 {
        self.field_height / 4
    }

    pub fn bird_start_x(&self) -> i32 {
        self.field_width / 8
    }

    /// Derived from the field *width*, not its height.
    pub fn bird_start_y(&self) -> i32 {
        self.field_width / 2
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}
