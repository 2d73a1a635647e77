//! Rendering layer - all terminal output lives here.
//!
//! Tasks paint into the in-memory `Canvas`; once per tick this module
//! copies it to the terminal, overlays the window border and rings the
//! bell if anything asked for it.  No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    QueueableCommand,
};
use space_garbage::canvas::{Canvas, CellStyle};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_SPACE: Color = Color::White;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, canvas: &Canvas, beeps: u32) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SPACE))?;
    for row in 0..canvas.rows() {
        draw_row(out, canvas, row)?;
    }

    draw_border(out, canvas)?;

    if beeps > 0 {
        out.queue(Print('\x07'))?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.flush()?;
    Ok(())
}

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Print one canvas row, switching attributes only where the style
/// changes.  The last cell of the last row is skipped so the terminal
/// never scrolls.
fn draw_row<W: Write>(out: &mut W, canvas: &Canvas, row: usize) -> std::io::Result<()> {
    let cells = canvas.row_cells(row);
    let cells = if row + 1 == canvas.rows() && !cells.is_empty() {
        &cells[..cells.len() - 1]
    } else {
        cells
    };

    out.queue(cursor::MoveTo(0, row as u16))?;
    let mut current = CellStyle::Normal;
    let mut run = String::new();
    for cell in cells {
        if cell.style != current {
            out.queue(Print(&run))?;
            run.clear();
            set_style(out, cell.style)?;
            current = cell.style;
        }
        run.push(cell.symbol);
    }
    out.queue(Print(&run))?;
    if current != CellStyle::Normal {
        set_style(out, CellStyle::Normal)?;
    }
    Ok(())
}

fn set_style<W: Write>(out: &mut W, cell_style: CellStyle) -> std::io::Result<()> {
    out.queue(style::SetAttribute(Attribute::NormalIntensity))?;
    match cell_style {
        CellStyle::Dim => {
            out.queue(style::SetAttribute(Attribute::Dim))?;
        }
        CellStyle::Bold => {
            out.queue(style::SetAttribute(Attribute::Bold))?;
        }
        CellStyle::Normal => {}
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, canvas: &Canvas) -> std::io::Result<()> {
    let w = canvas.columns();
    let h = canvas.rows();
    if w < 2 || h < 2 {
        return Ok(());
    }

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 0 - top bar
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w - 2))))?;

    // Last row - bottom bar, without the bottom-right corner
    out.queue(cursor::MoveTo(0, (h - 1) as u16))?;
    out.queue(Print(format!("└{}", "─".repeat(w - 2))))?;

    // Side walls
    for row in 1..h - 1 {
        out.queue(cursor::MoveTo(0, row as u16))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo((w - 1) as u16, row as u16))?;
        out.queue(Print("│"))?;
    }

    out.queue(style::SetForegroundColor(C_SPACE))?;
    Ok(())
}
