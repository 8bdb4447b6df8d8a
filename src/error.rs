//! Error types for the terminal front-end

use thiserror::Error;

/// The simulation itself never fails; only terminal I/O and setup can.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal too small: need at least {min_width}x{min_height}, got {width}x{height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

/// Result type alias for front-end operations
pub type Result<T> = std::result::Result<T, GameError>;
