/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `WorldState` (and, where needed, an RNG handle) and returns a brand-new
/// `WorldState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Bird, GameStatus, Pipe, PipeSide, WorldState};

/// Score awarded per pipe passed (a top/bottom pair is worth 1).
const SCORE_PER_PIPE: f64 = 0.5;

// ── Constructors ─────────────────────────────────────────────────────────────

fn initial_bird(config: &GameConfig) -> Bird {
    Bird {
        x: config.bird_start_x(),
        y: config.bird_start_y(),
        width: config.bird_width,
        height: config.bird_height,
        velocity: 0,
    }
}

/// Build the state for the first run of a session.
pub fn init_state(config: GameConfig) -> WorldState {
    WorldState {
        bird: initial_bird(&config),
        pipes: Vec::new(),
        score: 0.0,
        high_score: 0,
        status: GameStatus::Playing,
        config,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Flap: override (not add to) the bird's velocity.  No-op once the run is over.
pub fn apply_impulse(state: &WorldState) -> WorldState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    WorldState {
        bird: Bird {
            velocity: state.config.flap_velocity,
            ..state.bird.clone()
        },
        ..state.clone()
    }
}

/// Start a fresh run, keeping the high score.  No-op while still playing.
pub fn restart(state: &WorldState) -> WorldState {
    if state.status == GameStatus::Playing {
        return state.clone();
    }
    WorldState {
        bird: initial_bird(&state.config),
        pipes: Vec::new(),
        score: 0.0,
        status: GameStatus::Playing,
        ..state.clone()
    }
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Draw a top-pipe y uniformly from the band below the baseline.
///
/// The result lies in `(baseline - h/4 - h/2, baseline - h/4]`; the fractional
/// part is truncated toward zero.
pub fn random_pipe_y(config: &GameConfig, rng: &mut impl Rng) -> i32 {
    let upper = (config.pipe_baseline - config.pipe_height / 4) as f64;
    let spread = (config.pipe_height / 2) as f64;
    (upper - rng.gen::<f64>() * spread) as i32
}

/// Append a top/bottom pair at the right edge with the top pipe at `top_y`.
pub fn place_pipe_pair(state: &WorldState, top_y: i32) -> WorldState {
    let config = &state.config;
    let pipe = |y: i32, side: PipeSide| Pipe {
        x: config.field_width,
        y,
        width: config.pipe_width,
        height: config.pipe_height,
        side,
        passed: false,
    };

    let bottom_y = top_y + config.pipe_height + config.opening_space();
    let mut pipes = state.pipes.clone();
    pipes.push(pipe(top_y, PipeSide::Top));
    pipes.push(pipe(bottom_y, PipeSide::Bottom));

    WorldState {
        pipes,
        ..state.clone()
    }
}

/// Spawn one pipe pair with a randomised gap.
pub fn spawn_pipes(state: &WorldState, rng: &mut impl Rng) -> WorldState {
    let top_y = random_pipe_y(&state.config, rng);
    place_pipe_pair(state, top_y)
}

// ── Collision ────────────────────────────────────────────────────────────────

/// Open-interval AABB overlap: touching edges do not collide.
pub fn collides(bird: &Bird, pipe: &Pipe) -> bool {
    bird.x < pipe.x + pipe.width
        && bird.x + bird.width > pipe.x
        && bird.y < pipe.y + pipe.height
        && bird.y + bird.height > pipe.y
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  A finished run is frozen: the
/// state comes back unchanged.
pub fn tick(state: &WorldState) -> WorldState {
    if state.status == GameStatus::GameOver {
        return state.clone();
    }
    let config = &state.config;

    // ── 1. Bird physics ──────────────────────────────────────────────────────
    let velocity = state.bird.velocity + config.gravity;
    let bird = Bird {
        velocity,
        // Only the top is clamped; falling out is handled below.
        y: (state.bird.y + velocity).max(0),
        ..state.bird.clone()
    };

    // ── 2. Scroll pipes & score the ones the bird has cleared ────────────────
    let mut score = state.score;
    let pipes: Vec<Pipe> = state
        .pipes
        .iter()
        .map(|p| {
            let x = p.x + config.pipe_velocity;
            let cleared = !p.passed && bird.x > x + p.width;
            if cleared {
                score += SCORE_PER_PIPE;
            }
            Pipe {
                x,
                passed: p.passed || cleared,
                ..p.clone()
            }
        })
        .collect();

    // ── 3. Collision & out-of-bounds ─────────────────────────────────────────
    let hit = pipes.iter().any(|p| collides(&bird, p));
    let fell = bird.y > config.field_height;

    let (status, high_score) = if hit || fell {
        (
            GameStatus::GameOver,
            state.high_score.max(score.floor() as u32),
        )
    } else {
        (GameStatus::Playing, state.high_score)
    };

    // ── 4. Drop pipes that are scored and fully off the left edge ───────────
    let pipes: Vec<Pipe> = pipes
        .into_iter()
        .filter(|p| !(p.passed && p.x + p.width < 0))
        .collect();

    WorldState {
        bird,
        pipes,
        score,
        high_score,
        status,
        ..state.clone()
    }
}
