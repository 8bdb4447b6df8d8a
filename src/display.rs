/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable `Frame`
/// snapshot.  No game logic is performed; this module only projects world
/// units onto the terminal grid and emits terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_bird::view::{Frame, PipeView, Rect};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::White;
const C_HUD_BEST: Color = Color::Yellow;
const C_BIRD: Color = Color::Yellow;
const C_PIPE: Color = Color::Green;
const C_PIPE_CAP: Color = Color::DarkGreen;
const C_HINT: Color = Color::DarkGrey;

/// Smallest terminal the layout fits in (HUD + border + play area + hint).
pub const MIN_WIDTH: u16 = 24;
pub const MIN_HEIGHT: u16 = 12;

// ── Projection ────────────────────────────────────────────────────────────────

/// Maps world units onto the cells inside the border.
///
/// Play area: columns `1..width-1`, rows `2..height-2`.
struct Viewport {
    field_width: i64,
    field_height: i64,
    cols: i64,
    rows: i64,
}

impl Viewport {
    fn new(frame: &Frame, (width, height): (u16, u16)) -> Self {
        Self {
            field_width: frame.field_width.max(1) as i64,
            field_height: frame.field_height.max(1) as i64,
            cols: width.saturating_sub(2) as i64,
            rows: height.saturating_sub(4) as i64,
        }
    }

    /// Cells covered by `[start, start+len)` along one axis, clipped.
    fn span(start: i32, len: i32, field: i64, cells: i64) -> Option<(u16, u16)> {
        let lo = (start as i64 * cells).div_euclid(field);
        let hi = -((-(start as i64 + len as i64) * cells).div_euclid(field));
        let lo = lo.clamp(0, cells);
        let hi = hi.clamp(0, cells);
        (lo < hi).then_some((lo as u16, hi as u16))
    }

    /// Screen-space `(col_lo, col_hi, row_lo, row_hi)`, half-open.
    fn project(&self, r: &Rect) -> Option<(u16, u16, u16, u16)> {
        let (c0, c1) = Self::span(r.x, r.width, self.field_width, self.cols)?;
        let (r0, r1) = Self::span(r.y, r.height, self.field_height, self.rows)?;
        Some((c0 + 1, c1 + 1, r0 + 2, r1 + 2))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for a terminal of `size` (columns, rows).
pub fn render<W: Write>(out: &mut W, frame: &Frame, size: (u16, u16)) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let viewport = Viewport::new(frame, size);

    draw_border(out, size)?;
    draw_hud(out, frame)?;

    for pipe in &frame.pipes {
        draw_pipe(out, &viewport, pipe)?;
    }
    draw_bird(out, &viewport, &frame.bird)?;
    draw_controls_hint(out, size)?;

    if frame.game_over {
        draw_game_over(out, frame, size)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, size.1.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, (width, height): (u16, u16)) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2 — ground
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, frame: &Frame) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>4}", frame.score)))?;

    if frame.high_score > 0 {
        out.queue(style::SetForegroundColor(C_HUD_BEST))?;
        out.queue(Print(format!("  Hi:{:>4}", frame.high_score)))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_pipe<W: Write>(out: &mut W, viewport: &Viewport, pipe: &PipeView) -> std::io::Result<()> {
    let Some((c0, c1, r0, r1)) = viewport.project(&pipe.rect) else {
        return Ok(());
    };
    let body = "█".repeat((c1 - c0) as usize);
    let cap = "▓".repeat((c1 - c0) as usize);

    // The cap sits on the end facing the opening.
    let cap_row = if pipe.is_top { r1 - 1 } else { r0 };

    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        if row == cap_row {
            out.queue(style::SetForegroundColor(C_PIPE_CAP))?;
            out.queue(Print(&cap))?;
        } else {
            out.queue(style::SetForegroundColor(C_PIPE))?;
            out.queue(Print(&body))?;
        }
    }
    Ok(())
}

fn draw_bird<W: Write>(out: &mut W, viewport: &Viewport, bird: &Rect) -> std::io::Result<()> {
    // Above the top edge or below the ground: nothing to draw.
    let Some((c0, c1, r0, r1)) = viewport.project(bird) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_BIRD))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print("█".repeat((c1 - c0).saturating_sub(1) as usize)))?;
        out.queue(Print("►"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, (_, height): (u16, u16)) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE : Flap   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, frame: &Frame, (width, height): (u16, u16)) -> std::io::Result<()> {
    let score_line = format!("Score: {}", frame.score);
    let best_line = format!("High Score: {}", frame.high_score);
    let lines: [(&str, Color); 6] = [
        ("╔════════════════╗", Color::Red),
        ("║   GAME  OVER   ║", Color::Red),
        ("╚════════════════╝", Color::Red),
        (score_line.as_str(), Color::White),
        (best_line.as_str(), Color::Yellow),
        ("ENTER - Restart  Q - Quit", Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
