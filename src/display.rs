/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands, scaled through a `Viewport`.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use arena_shooter::entities::{GameState, Tint};
use arena_shooter::viewport::Viewport;

/// Radius bullets are drawn at, in playfield units.
const BULLET_DRAW_RADIUS: f32 = 5.0;

fn color_of(tint: Tint) -> Color {
    match tint {
        Tint::Cyan => Color::Cyan,
        Tint::Green => Color::Green,
        Tint::White => Color::White,
        Tint::Yellow => Color::Yellow,
        Tint::Red => Color::Red,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState, vp: &Viewport) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let p = &state.player;
    draw_disc(out, vp, p.x, p.y, p.radius, color_of(p.color))?;

    for bullet in &state.bullets {
        draw_disc(
            out,
            vp,
            bullet.x,
            bullet.y,
            BULLET_DRAW_RADIUS,
            color_of(bullet.color),
        )?;
    }

    for enemy in &state.enemies {
        draw_disc(out, vp, enemy.x, enemy.y, enemy.radius, color_of(enemy.color))?;
    }

    draw_hud(out, state)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, vp.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Filled disc ───────────────────────────────────────────────────────────────

/// Rasterize a filled circle: every cell whose center lies within the
/// radius gets a block character.  The center cell is drawn
/// unconditionally so small discs (bullets) stay visible on coarse grids.
fn draw_disc<W: Write>(
    out: &mut W,
    vp: &Viewport,
    cx: f32,
    cy: f32,
    radius: f32,
    color: Color,
) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(color))?;

    let (cw, ch) = vp.cell_size();
    let col_lo = ((cx - radius) / cw).floor().max(0.0) as i32;
    let col_hi = ((cx + radius) / cw).ceil().min(vp.cols as f32) as i32;
    let row_lo = ((cy - radius) / ch).floor().max(0.0) as i32;
    let row_hi = ((cy + radius) / ch).ceil().min(vp.rows as f32) as i32;

    for row in row_lo..row_hi {
        for col in col_lo..col_hi {
            let (px, py) = vp.to_field(col as u16, row as u16);
            if (px - cx).hypot(py - cy) <= radius {
                out.queue(cursor::MoveTo(col as u16, row as u16))?;
                out.queue(Print("█"))?;
            }
        }
    }

    if let Some((col, row)) = vp.to_cell(cx, cy) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("█"))?;
    }

    Ok(())
}

// ── HUD (top-left overlay) ────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Kills: {}", state.player.kills)))?;
    out.queue(cursor::MoveTo(1, 1))?;
    // Levels are stored 0-based but shown 1-based.
    out.queue(Print(format!("Weapon Level: {}", state.player.weapon_level + 1)))?;
    Ok(())
}
