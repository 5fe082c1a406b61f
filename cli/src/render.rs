use std::fmt::Write as _;

use gridsweep_core::{Board, CellState};

/// Glyphs from the classic text board: `#` hidden, blank for a clear cell,
/// the digit for a numbered cell, `*` for an exposed mine.
fn cell_glyph(state: CellState) -> char {
    match state {
        CellState::Hidden => '#',
        CellState::RevealedMine => '*',
        CellState::Revealed(0) => ' ',
        CellState::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
    }
}

/// Column header letter for column `x`.
fn column_letter(x: u8) -> char {
    (b'A' + x) as char
}

/// Renders the whole board: a lettered column header, then one numbered row
/// of cell glyphs per grid row.
pub fn render_board(board: &Board) -> String {
    let last_row = board.height().saturating_sub(1).max(1);
    let label_width = last_row.ilog10() as usize + 1;
    let mut out = String::new();

    out.push('\n');
    out.push_str(&" ".repeat(label_width + 2));
    for x in 0..board.width() {
        out.push(column_letter(x));
    }
    out.push('\n');

    for y in 0..board.height() {
        // Row prefix and header indent are both label_width + 2 wide so the
        // letters sit directly above their columns.
        let _ = write!(out, "{y:>w$} ", w = label_width + 1);
        for x in 0..board.width() {
            out.push(cell_glyph(board.cell_at((x, y))));
        }
        out.push('\n');
    }

    out.push('\n');
    out
}
