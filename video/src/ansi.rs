//! VT100/ANSI escape sequences used by the roulette screen.
//!
//! Cursor addressing is relative to the home position: `ESC[H` followed by
//! down and right moves, which every serial terminal emulator understands.

use core::fmt::{self, Write};

use bitflags::bitflags;
use croupier_abi::{Denomination, SpotColor};

pub const ESC: &str = "\x1b";

bitflags! {
    /// Text attributes applied on top of a color.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Attr: u8 {
        const BOLD = 1 << 0;
        const UNDERLINE = 1 << 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
    Green,
    Yellow,
    Purple,
    Orange,
    Blue,
    White,
    /// Highlight for winning positions on the table.
    Cyan,
}

impl Color {
    /// SGR parameter selecting this foreground color.
    pub const fn sgr(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Black => "30",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Purple => "35",
            Color::Orange => "38:5:202",
            Color::Blue => "34",
            Color::White => "37",
            Color::Cyan => "96",
        }
    }

    pub const fn of_spot(color: SpotColor) -> Self {
        match color {
            SpotColor::Red => Color::Red,
            SpotColor::Black => Color::Black,
            SpotColor::Green => Color::Green,
        }
    }

    pub const fn of_chip(chip: Denomination) -> Self {
        match chip {
            Denomination::Yellow => Color::Yellow,
            Denomination::Purple => Color::Purple,
            Denomination::Black => Color::Black,
            Denomination::Orange => Color::Orange,
            Denomination::Green => Color::Green,
            Denomination::Blue => Color::Blue,
            Denomination::Red => Color::Red,
            Denomination::White => Color::White,
        }
    }
}

/// Clear the screen, home the cursor, drop attributes and hide the cursor.
pub fn reset_screen<W: Write>(w: &mut W) -> fmt::Result {
    write!(w, "{ESC}[2J{ESC}[H{ESC}[0m{ESC}[?25l")
}

pub fn reset_attributes<W: Write>(w: &mut W) -> fmt::Result {
    write!(w, "{ESC}[0m")
}

pub fn clear_line<W: Write>(w: &mut W) -> fmt::Result {
    write!(w, "{ESC}[2K{ESC}[1G")
}

/// Move to `row`, `col` (both zero-based) from the home position.
///
/// A zero-length move is skipped: most terminals treat `ESC[0B` as one step.
pub fn goto<W: Write>(w: &mut W, row: u16, col: u16) -> fmt::Result {
    write!(w, "{ESC}[H")?;
    if row > 0 {
        write!(w, "{ESC}[{row}B")?;
    }
    if col > 0 {
        write!(w, "{ESC}[{col}C")?;
    }
    Ok(())
}

pub fn set_color<W: Write>(w: &mut W, color: Color) -> fmt::Result {
    write!(w, "{ESC}[{}m", color.sgr())
}

pub fn set_attrs<W: Write>(w: &mut W, attrs: Attr) -> fmt::Result {
    if attrs.contains(Attr::BOLD) {
        write!(w, "{ESC}[1m")?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        write!(w, "{ESC}[4m")?;
    }
    Ok(())
}

/// Overwrite `width` cells at the cursor with spaces and step back over them.
pub fn blank<W: Write>(w: &mut W, width: u16) -> fmt::Result {
    for _ in 0..width {
        w.write_char(' ')?;
    }
    if width > 0 {
        write!(w, "{ESC}[{width}D")?;
    }
    Ok(())
}
