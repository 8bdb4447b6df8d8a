/// Read-only snapshot of the world handed to renderers.

use crate::entities::{GameStatus, PipeSide, WorldState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipeView {
    pub rect: Rect,
    pub is_top: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub field_width: i32,
    pub field_height: i32,
    pub bird: Rect,
    /// Spawn order.
    pub pipes: Vec<PipeView>,
    /// Score truncated for display.
    pub score: u32,
    pub high_score: u32,
    pub game_over: bool,
}

pub fn snapshot(state: &WorldState) -> Frame {
    let bird = &state.bird;
    Frame {
        field_width: state.config.field_width,
        field_height: state.config.field_height,
        bird: Rect {
            x: bird.x,
            y: bird.y,
            width: bird.width,
            height: bird.height,
        },
        pipes: state
            .pipes
            .iter()
            .map(|p| PipeView {
                rect: Rect {
                    x: p.x,
                    y: p.y,
                    width: p.width,
                    height: p.height,
                },
                is_top: p.side == PipeSide::Top,
            })
            .collect(),
        score: state.score as u32,
        high_score: state.high_score,
        game_over: state.status == GameStatus::GameOver,
    }
}
