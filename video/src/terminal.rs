//! The roulette screen drawn with escape sequences on a character terminal.

use core::fmt::{self, Write};

use croupier_abi::{Denomination, Spot};
use croupier_core::{BoardSnapshot, ChipPanel, GameDisplay, WheelWindow};

use crate::ansi::{self, Attr, Color};
use crate::layout::*;

/// Renders the game onto any `fmt::Write` sink: the COM1 UART on hardware,
/// stdout on a hosted build, a `String` in tests.
///
/// Output errors are dropped; a terminal that stops listening cannot be
/// reported to anyway.
pub struct AnsiTerminal<W: Write> {
    out: W,
}

impl<W: Write> AnsiTerminal<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw_section(&mut self, first_row: u16, lines: &[&str]) -> fmt::Result {
        for (row, line) in (first_row..).zip(lines.iter()) {
            ansi::goto(&mut self.out, row, 0)?;
            self.out.write_str(line)?;
        }
        Ok(())
    }

    fn draw_start_screen(&mut self) -> fmt::Result {
        let out = &mut self.out;
        ansi::reset_screen(out)?;
        ansi::goto(out, TITLE_ROW, TITLE_COL)?;
        ansi::set_attrs(out, Attr::BOLD | Attr::UNDERLINE)?;
        out.write_str(TITLE)?;
        ansi::reset_attributes(out)?;

        self.draw_section(WHEEL_OUTLINE_ROW, &WHEEL_OUTLINE)?;
        self.draw_section(TABLE_OUTLINE_ROW, &TABLE_OUTLINE)?;

        ansi::goto(&mut self.out, BOTTOM_HEADER_ROW, 0)?;
        ansi::set_attrs(&mut self.out, Attr::BOLD)?;
        self.out.write_str(BOTTOM_HEADER)?;
        ansi::reset_attributes(&mut self.out)?;
        self.draw_section(BOTTOM_OUTLINE_ROW, &BOTTOM_OUTLINE)?;

        for chip in Denomination::ALL {
            let cell = chip_cell(chip);
            ansi::goto(&mut self.out, cell.row, cell.label_col)?;
            ansi::set_color(&mut self.out, Color::of_chip(chip))?;
            write!(self.out, "{chip}")?;
        }
        ansi::reset_attributes(&mut self.out)
    }

    fn draw_spot(&mut self, spot: &Spot, highlight: Color) -> fmt::Result {
        let color = if spot.highlighted {
            highlight
        } else {
            Color::of_spot(spot.color)
        };
        ansi::set_color(&mut self.out, color)?;
        write!(self.out, "{:>2}", spot.position.label())
    }

    fn draw_board(&mut self, board: &BoardSnapshot) -> fmt::Result {
        let (double_zero, rest) = board.spots.split_at(1);
        let (zero, grid) = rest.split_at(1);

        ansi::reset_attributes(&mut self.out)?;
        ansi::set_attrs(&mut self.out, Attr::BOLD)?;
        ansi::goto(&mut self.out, TABLE_ROW, ZERO_COL)?;
        self.draw_spot(&double_zero[0], Color::Cyan)?;

        for (row, spots) in (0u16..).zip(grid.chunks(GRID_COLUMNS)) {
            for (column, spot) in (0u16..).zip(spots.iter()) {
                ansi::goto(
                    &mut self.out,
                    TABLE_ROW + row * ROW_SPACING,
                    GRID_COL + column * CELL_STRIDE,
                )?;
                self.draw_spot(spot, Color::Cyan)?;
            }
        }

        ansi::goto(&mut self.out, ZERO_ROW, ZERO_COL)?;
        self.draw_spot(&zero[0], Color::Cyan)?;
        ansi::reset_attributes(&mut self.out)
    }

    fn draw_wheel(&mut self, window: &WheelWindow) -> fmt::Result {
        ansi::reset_attributes(&mut self.out)?;
        for (slot, spot) in (0u16..).zip(window.spots.iter()) {
            ansi::goto(&mut self.out, WHEEL_ROW, WHEEL_COL + slot * CELL_STRIDE)?;
            ansi::set_attrs(&mut self.out, Attr::BOLD)?;
            if spot.highlighted {
                ansi::set_attrs(&mut self.out, Attr::UNDERLINE)?;
            }
            ansi::set_color(&mut self.out, Color::of_spot(spot.color))?;
            write!(self.out, "{:>2}", spot.position.label())?;
            ansi::reset_attributes(&mut self.out)?;
        }
        Ok(())
    }

    fn draw_field(&mut self, row: u16, col: u16, width: u16, value: u64) -> fmt::Result {
        ansi::goto(&mut self.out, row, col)?;
        ansi::blank(&mut self.out, width)?;
        write!(self.out, "{value}")
    }

    fn draw_chips(&mut self, panel: &ChipPanel) -> fmt::Result {
        ansi::reset_attributes(&mut self.out)?;
        for chip in Denomination::ALL {
            let cell = chip_cell(chip);
            self.draw_field(
                cell.row,
                cell.count_col,
                CHIP_COUNT_WIDTH,
                u64::from(panel.counts[chip.slot()]),
            )?;
        }
        self.draw_field(BET_ROW, BET_COL, BET_WIDTH, panel.bet)?;
        self.draw_field(BALANCE_ROW, BALANCE_COL, BALANCE_WIDTH, panel.balance)
    }

    fn draw_message(&mut self, text: fmt::Arguments<'_>) -> fmt::Result {
        ansi::goto(&mut self.out, MESSAGE_ROW, 0)?;
        ansi::reset_attributes(&mut self.out)?;
        ansi::clear_line(&mut self.out)?;
        self.out.write_fmt(text)?;
        self.out.write_char(' ')
    }
}

impl<W: Write> GameDisplay for AnsiTerminal<W> {
    fn start_screen(&mut self) {
        let _ = self.draw_start_screen();
    }

    fn board(&mut self, board: &BoardSnapshot) {
        let _ = self.draw_board(board);
    }

    fn wheel(&mut self, window: &WheelWindow) {
        let _ = self.draw_wheel(window);
    }

    fn chips(&mut self, panel: &ChipPanel) {
        let _ = self.draw_chips(panel);
    }

    fn message(&mut self, text: fmt::Arguments<'_>) {
        let _ = self.draw_message(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use croupier_abi::BetCategory;
    use croupier_core::{resolve, BetSelection, ChipLedger};
    use std::string::String;

    fn terminal() -> AnsiTerminal<String> {
        AnsiTerminal::new(String::new())
    }

    #[test]
    fn start_screen_clears_and_titles() {
        let mut t = terminal();
        t.start_screen();
        let out = t.into_inner();
        assert!(out.starts_with("\x1b[2J\x1b[H"));
        assert!(out.contains("\x1b[1m\x1b[4mROULETTE"));
        assert!(out.contains("BETTING PAYOUTS"));
        assert!(out.contains("\x1b[33m$1000"));
        assert!(out.contains("\x1b[37m$1"));
    }

    #[test]
    fn board_highlights_only_winners() {
        let set = resolve(BetSelection::indexed(BetCategory::Street, 0)).expect("street");
        let mut t = terminal();
        t.board(&BoardSnapshot::new(&set));
        let out = t.into_inner();
        assert_eq!(out.matches("\x1b[96m").count(), 3);
        assert!(out.contains("\x1b[H\x1b[12B\x1b[1C\x1b[32m00"));
        assert!(out.contains("\x1b[H\x1b[16B\x1b[1C\x1b[32m 0"));
    }

    #[test]
    fn wheel_underlines_the_pointer() {
        let mut t = terminal();
        t.wheel(&WheelWindow::centered(9));
        let out = t.into_inner();
        assert_eq!(out.matches("\x1b[4m").count(), 1);
        assert!(out.contains("\x1b[4m\x1b[30m17"));
    }

    #[test]
    fn chip_panel_fills_fields() {
        let mut t = terminal();
        t.chips(&ChipPanel::new(&ChipLedger::starting(), 25));
        let out = t.into_inner();
        assert!(out.contains("\x1b[H\x1b[32B\x1b[60C        \x1b[8D4261"));
        assert!(out.contains("\x1b[H\x1b[23B\x1b[63C      \x1b[6D25"));
        assert!(out.contains("\x1b[H\x1b[30B\x1b[63C   \x1b[3D20"));
    }

    #[test]
    fn message_replaces_the_status_line() {
        let mut t = terminal();
        t.message(format_args!("Trade in chips? (yes/no):"));
        let out = t.into_inner();
        assert_eq!(
            out,
            "\x1b[H\x1b[35B\x1b[0m\x1b[2K\x1b[1GTrade in chips? (yes/no): "
        );
    }
}
