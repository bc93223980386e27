//! Tessera Hardware Abstraction Layer (HAL) traits.
//!
//! This crate defines traits that abstract away platform-specific hardware
//! details. The console multiplexer is written against these traits so the
//! same logic drives the VGA text buffer on real hardware and mock devices
//! in hosted tests.

#![no_std]

/// Trait for a character-cell text display with a hardware cursor.
///
/// Cells are 16 bits wide: low byte is the glyph, high byte the attribute.
/// Positions are linear offsets into the row-major cell grid.
pub trait TextDisplay {
    /// Reads the current hardware cursor position.
    fn cursor(&mut self) -> usize;
    /// Moves the hardware cursor to `pos`.
    fn set_cursor(&mut self, pos: usize);
    /// Writes one cell at the given offset.
    fn write_cell(&mut self, pos: usize, cell: u16);
    /// Reads one cell back from the display.
    fn read_cell(&mut self, pos: usize) -> u16;
}

/// Trait for a serial port or similar character-based communication channel.
pub trait Serial {
    /// Writes a single byte to the serial port.
    fn write_byte(&mut self, byte: u8);
    /// Reads a single byte from the serial port, if available.
    fn read_byte(&mut self) -> Option<u8>;
}
