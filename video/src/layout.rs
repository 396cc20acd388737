//! Fixed screen geometry. Rows and columns are zero-based from the top left.

use croupier_abi::{DENOMINATION_COUNT, Denomination};

pub const TITLE: &str = "ROULETTE";
pub const TITLE_ROW: u16 = 0;
pub const TITLE_COL: u16 = 31;

pub const WHEEL_OUTLINE_ROW: u16 = 4;
pub const WHEEL_OUTLINE: [&str; 3] = [
    "             -------------------|----|-------------------",
    "                 |    |    |    |    |    |    |    |    ",
    "             -------------------|----|-------------------",
];
/// Row and column of the leftmost pocket in the wheel window.
pub const WHEEL_ROW: u16 = 5;
pub const WHEEL_COL: u16 = 14;

pub const TABLE_OUTLINE_ROW: u16 = 9;
pub const TABLE_OUTLINE: [&str; 16] = [
    "   -------------------------------------------------------------",
    "   |            1 - 18           |           19 - 36           |",
    "---|-----------------------------|-----------------------------|------",
    "|  |    |    |    |    |    |    |    |    |    |    |    |    | 3rd |",
    "|  |----|----|----|----|----|----|----|----|----|----|----|----|-----|",
    "|--|    |    |    |    |    |    |    |    |    |    |    |    | 2nd |",
    "|  |----|----|----|----|----|----|----|----|----|----|----|----|-----|",
    "|  |    |    |    |    |    |    |    |    |    |    |    |    | 1st |",
    "---|-------------------|-------------------|-------------------|------",
    "   |       1 - 12      |      13 - 24      |      25 - 36      |",
    "   |-----------------------------------------------------------|",
    "   |     EVEN     |     RED      |    BLACK     |     ODD      |",
    "   -------------------------------------------------------------",
    "                                                        --------------",
    "                                                        |BET: $      |",
    "                                                        --------------",
];
/// Top row of the number grid; "00" sits at its left edge.
pub const TABLE_ROW: u16 = 12;
/// "0" sits at the left edge of the bottom grid row.
pub const ZERO_ROW: u16 = TABLE_ROW + 2 * ROW_SPACING;
pub const ZERO_COL: u16 = 1;
pub const GRID_COL: u16 = 5;
pub const GRID_COLUMNS: usize = 12;
pub const ROW_SPACING: u16 = 2;
/// Horizontal distance between neighbouring pockets, on the wheel and the grid.
pub const CELL_STRIDE: u16 = 5;

pub const BOTTOM_HEADER_ROW: u16 = 25;
pub const BOTTOM_HEADER: &str =
    "             BETTING PAYOUTS                             CHIPS";
pub const BOTTOM_OUTLINE_ROW: u16 = 26;
pub const BOTTOM_OUTLINE: [&str; 10] = [
    "---------------------------------------------    ---------------------",
    "| Straight: 35 to 1 | Double Street: 5 to 1 |    |     :   |   :     |",
    "| Split: 17 to 1    | Dozen: 2 to 1         |    |    :    |   :     |",
    "| Street: 11 to 1   | Column: 2 to 1        |    |    :    |  :      |",
    "| Basket: 11 to 1   | Red/Black: 1 to 1     |    |   :     |  :      |",
    "| Corner: 8 to 1    | Odd/Even: 1 to 1      |    ---------------------",
    "| Top Line: 6 to 1  | Low/High: 1 to 1      |    |BALANCE: $         |",
    "---------------------------------------------    ---------------------",
    "----------------------------------------------------------------------",
    "----------------------------------------------------------------------",
];

pub const BET_ROW: u16 = 23;
pub const BET_COL: u16 = 63;
pub const BET_WIDTH: u16 = 6;

pub const BALANCE_ROW: u16 = 32;
pub const BALANCE_COL: u16 = 60;
pub const BALANCE_WIDTH: u16 = 8;

/// The single status/prompt line, between the two bottom rules.
pub const MESSAGE_ROW: u16 = 35;

pub const CHIP_COUNT_WIDTH: u16 = 3;

/// Where a denomination's label and count are drawn in the chip panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChipCell {
    pub row: u16,
    pub label_col: u16,
    pub count_col: u16,
}

const fn cell(row: u16, label_col: u16, count_col: u16) -> ChipCell {
    ChipCell {
        row,
        label_col,
        count_col,
    }
}

/// Indexed by `Denomination::slot`.
pub const CHIP_CELLS: [ChipCell; DENOMINATION_COUNT] = [
    cell(27, 50, 56),
    cell(28, 50, 55),
    cell(29, 50, 55),
    cell(30, 50, 54),
    cell(27, 60, 64),
    cell(28, 60, 64),
    cell(29, 60, 63),
    cell(30, 60, 63),
];

#[inline]
pub const fn chip_cell(chip: Denomination) -> ChipCell {
    CHIP_CELLS[chip.slot()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_columns_follow_the_separator() {
        for chip in Denomination::ALL {
            let c = chip_cell(chip);
            let line = BOTTOM_OUTLINE[(c.row - BOTTOM_OUTLINE_ROW) as usize].as_bytes();
            assert_eq!(line[c.count_col as usize - 1], b':', "{chip}");
        }
    }

    #[test]
    fn value_fields_follow_their_captions() {
        let bet = TABLE_OUTLINE[(BET_ROW - TABLE_OUTLINE_ROW) as usize];
        assert_eq!(&bet[..BET_COL as usize], "                                                        |BET: $");
        let balance = BOTTOM_OUTLINE[(BALANCE_ROW - BOTTOM_OUTLINE_ROW) as usize];
        assert!(balance[..BALANCE_COL as usize].ends_with("|BALANCE: $"));
    }

    #[test]
    fn pockets_land_inside_grid_cells() {
        let top = TABLE_OUTLINE[(TABLE_ROW - TABLE_OUTLINE_ROW) as usize].as_bytes();
        for i in 0..GRID_COLUMNS as u16 {
            let col = (GRID_COL + i * CELL_STRIDE) as usize;
            assert_eq!(&top[col..col + 2], b"  ");
        }
        let wheel = WHEEL_OUTLINE[(WHEEL_ROW - WHEEL_OUTLINE_ROW) as usize].as_bytes();
        for i in 0..9u16 {
            let col = (WHEEL_COL + i * CELL_STRIDE) as usize;
            assert_eq!(&wheel[col..col + 2], b"  ");
        }
    }
}
