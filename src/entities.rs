/// All game entity types — pure data, no logic.

use crate::config::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipeSide {
    Top,
    Bottom,
}

// ── Bird ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bird {
    /// Never changes during a run.
    pub x: i32,
    /// Top edge.  Clamped to ≥ 0 after every tick.
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Vertical velocity in units per tick (positive = falling).
    pub velocity: i32,
}

// ── Pipes ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Pipe {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub side: PipeSide,
    /// Set once the bird is past this pipe; it has then contributed its 0.5.
    pub passed: bool,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire run state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub bird: Bird,
    /// Spawn order, which is also left-to-right order.
    pub pipes: Vec<Pipe>,
    /// Fractional: each pipe is worth 0.5, so a pair is worth 1.
    pub score: f64,
    /// Best whole score across restarts in this process.
    pub high_score: u32,
    pub status: GameStatus,
    pub config: GameConfig,
}
