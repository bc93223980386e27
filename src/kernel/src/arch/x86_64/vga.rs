//! VGA text-mode display for x86_64.
//!
//! Implements the console's hardware sink over the memory-mapped cell
//! buffer at 0xB8000 and the CRT controller cursor registers. Unlike a
//! plain line printer, the console multiplexer addresses the display by
//! absolute cell offset and drives the hardware cursor itself, so this
//! driver is a thin `TextDisplay` with no formatting state of its own.

use core::ptr;
use tessera_hal::TextDisplay;
use x86_64::instructions::port::Port;

/// VGA text buffer memory-mapped I/O address.
const VGA_BUFFER_ADDR: usize = 0xB8000;

/// CRT controller index port; the data port is one above it.
const CRT_INDEX_PORT: u16 = 0x3D4;

/// CRT register holding the high byte of the cursor position.
const CURSOR_HIGH: u8 = 14;

/// CRT register holding the low byte of the cursor position.
const CURSOR_LOW: u8 = 15;

/// Total cells in the 80x25 text grid.
const CELLS: usize = 80 * 25;

/// The VGA text display and its hardware cursor.
///
/// Cells are 16 bits: low byte glyph, high byte attribute.
pub struct VgaDisplay {
    /// Pointer to the VGA cell buffer.
    ///
    /// SAFETY: the buffer at 0xB8000 is always mapped in x86 text mode and
    /// lives for the kernel's lifetime.
    buffer: *mut u16,
    index: Port<u8>,
    data: Port<u8>,
}

// SAFETY: VgaDisplay only touches the VGA buffer through volatile operations
// and the CRT ports through Port reads/writes. The hardware exists for the
// kernel's lifetime and access is serialized by the console lock.
unsafe impl Send for VgaDisplay {}

impl VgaDisplay {
    /// Creates the display driver.
    pub fn new() -> Self {
        VgaDisplay {
            buffer: VGA_BUFFER_ADDR as *mut u16,
            index: Port::new(CRT_INDEX_PORT),
            data: Port::new(CRT_INDEX_PORT + 1),
        }
    }
}

impl Default for VgaDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDisplay for VgaDisplay {
    fn cursor(&mut self) -> usize {
        // Cursor position: col + 80*row, split across two CRT registers.
        // SAFETY: 0x3D4/0x3D5 are the standard CRT controller ports; reading
        // the cursor registers has no side effects.
        unsafe {
            self.index.write(CURSOR_HIGH);
            let high = self.data.read() as usize;
            self.index.write(CURSOR_LOW);
            let low = self.data.read() as usize;
            (high << 8) | low
        }
    }

    fn set_cursor(&mut self, pos: usize) {
        debug_assert!(pos < CELLS, "cursor position out of bounds");
        // SAFETY: writing the CRT cursor registers only moves the visible
        // cursor; the position was bounds-checked above.
        unsafe {
            self.index.write(CURSOR_HIGH);
            self.data.write((pos >> 8) as u8);
            self.index.write(CURSOR_LOW);
            self.data.write(pos as u8);
        }
    }

    fn write_cell(&mut self, pos: usize, cell: u16) {
        debug_assert!(pos < CELLS, "cell offset out of bounds");
        // SAFETY: pos is within the 80x25 grid; volatile because the buffer
        // is memory-mapped I/O scanned out by the hardware.
        unsafe {
            ptr::write_volatile(self.buffer.add(pos), cell);
        }
    }

    fn read_cell(&mut self, pos: usize) -> u16 {
        debug_assert!(pos < CELLS, "cell offset out of bounds");
        // SAFETY: same bounds and volatility argument as `write_cell`.
        unsafe { ptr::read_volatile(self.buffer.add(pos)) }
    }
}
