//! Per-terminal screen state.

use super::ansi::{EscapeParser, DEFAULT_ATTR};
use super::input::LineBuffer;
use super::{COLS, GRID_CELLS};

/// One virtual terminal: its own screen grid, logical cursor, attribute
/// word, escape-parser state, and input line buffer.
///
/// The grid mirrors what the physical display would show if this terminal
/// were active; the cursor is the next write offset and may transiently
/// equal `GRID_CELLS` until the pending scroll runs.
pub struct Terminal {
    pub(super) grid: [u16; GRID_CELLS],
    pub(super) cursor: usize,
    pub(super) attr: u16,
    pub(super) parser: EscapeParser,
    pub(super) input: LineBuffer,
}

impl Terminal {
    pub(super) const fn new() -> Self {
        Self {
            grid: [0; GRID_CELLS],
            cursor: 0,
            attr: DEFAULT_ATTR,
            parser: EscapeParser::new(),
            input: LineBuffer::new(),
        }
    }

    /// Advances the cursor to the start of the next row.
    pub(super) fn newline(&mut self) {
        self.cursor += COLS - self.cursor % COLS;
    }

    /// Steps the cursor back one cell for a backspace, if possible.
    pub(super) fn rub_out(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Stores one glyph with the current attribute at the cursor.
    pub(super) fn put(&mut self, glyph: u8) {
        self.grid[self.cursor] = cell(glyph, self.attr);
        self.cursor += 1;
    }

    /// True once the cursor has passed the last row.
    pub(super) fn needs_scroll(&self) -> bool {
        self.cursor >= GRID_CELLS
    }

    /// Discards the top row, shifts the rest up, blanks the freed tail.
    pub(super) fn scroll_up(&mut self) {
        self.grid.copy_within(COLS.., 0);
        self.cursor -= COLS;
        for c in &mut self.grid[self.cursor..] {
            *c = 0;
        }
    }
}

/// Packs a glyph and an attribute into one display cell.
pub(super) const fn cell(glyph: u8, attr: u16) -> u16 {
    glyph as u16 | attr
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ROWS;

    #[test]
    fn newline_snaps_to_row_start() {
        let mut term = Terminal::new();
        term.put(b'x');
        term.newline();
        assert_eq!(term.cursor, COLS);
        term.newline();
        assert_eq!(term.cursor, 2 * COLS);
    }

    #[test]
    fn rub_out_stops_at_origin() {
        let mut term = Terminal::new();
        term.rub_out();
        assert_eq!(term.cursor, 0);
        term.put(b'x');
        term.rub_out();
        assert_eq!(term.cursor, 0);
    }

    #[test]
    fn scroll_discards_the_top_row() {
        let mut term = Terminal::new();
        term.put(b'A');
        term.newline();
        term.put(b'B');
        // Walk the cursor to the end of the grid.
        for _ in 0..ROWS - 1 {
            term.newline();
        }
        assert!(term.needs_scroll());
        term.scroll_up();
        assert_eq!(term.cursor, (ROWS - 1) * COLS);
        assert_eq!(term.grid[0], cell(b'B', DEFAULT_ATTR));
        assert_eq!(term.grid[term.cursor], 0);
    }
}
