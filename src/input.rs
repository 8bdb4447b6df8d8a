/// Keyboard → game command translation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::GameStatus;

/// Commands the game controller understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Upward impulse.
    Flap,
    /// Begin a new run after game over.
    Restart,
}

/// What the front-end should do with a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Game(Command),
    Quit,
}

/// Map a key press to an action.  Restart is only forwarded while the run
/// is over; flap is always forwarded (the controller ignores it after
/// game over).
pub fn map_key(code: KeyCode, modifiers: KeyModifiers, status: GameStatus) -> Option<KeyAction> {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Quit),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char(' ') | KeyCode::Up => Some(KeyAction::Game(Command::Flap)),
        KeyCode::Enter if status == GameStatus::GameOver => {
            Some(KeyAction::Game(Command::Restart))
        }
        _ => None,
    }
}

/// Like [`map_key`], but only key presses count.  Repeat and release events
/// (sent by keyboard-enhanced terminals) are ignored so a held key flaps once.
pub fn map_event(event: &KeyEvent, status: GameStatus) -> Option<KeyAction> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    map_key(event.code, event.modifiers, status)
}
