//! Line-discipline input buffer.
//!
//! A fixed circular buffer with three monotonically non-decreasing indices,
//! `read <= write <= edit`, using wrapping arithmetic; modulo is applied for
//! addressing only. `[read, write)` holds committed line data not yet
//! consumed, `[write, edit)` holds characters typed but still editable.
//! Committing (`write = edit`) is what makes a line visible to readers, so
//! a reader can never observe a partially typed line.

/// Capacity of each terminal's input buffer, in bytes.
pub const INPUT_BUF: usize = 128;

/// One terminal's input line buffer.
#[derive(Debug)]
pub struct LineBuffer {
    buf: [u8; INPUT_BUF],
    read: u32,
    write: u32,
    edit: u32,
}

impl LineBuffer {
    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; INPUT_BUF],
            read: 0,
            write: 0,
            edit: 0,
        }
    }

    fn at(&self, index: u32) -> u8 {
        self.buf[index as usize % INPUT_BUF]
    }

    /// Number of committed bytes not yet consumed by a reader.
    pub fn committed(&self) -> u32 {
        self.write.wrapping_sub(self.read)
    }

    /// Number of bytes typed but not yet committed.
    pub fn editing(&self) -> u32 {
        self.edit.wrapping_sub(self.write)
    }

    /// True while another character can be accepted.
    ///
    /// Characters arriving with the buffer full are dropped by the caller;
    /// that is backpressure, not an error.
    pub fn has_room(&self) -> bool {
        self.edit.wrapping_sub(self.read) < INPUT_BUF as u32
    }

    /// True when every slot is occupied, which forces a commit.
    pub fn is_full(&self) -> bool {
        self.edit.wrapping_sub(self.read) == INPUT_BUF as u32
    }

    /// Stores one character at the edit position.
    pub fn push(&mut self, c: u8) {
        debug_assert!(self.has_room());
        self.buf[self.edit as usize % INPUT_BUF] = c;
        self.edit = self.edit.wrapping_add(1);
    }

    /// True if there is an uncommitted character to rub out.
    pub fn can_erase(&self) -> bool {
        self.edit != self.write
    }

    /// True while kill-line should keep erasing: an uncommitted character
    /// exists and it is not a line terminator.
    pub fn can_kill(&self) -> bool {
        self.can_erase() && self.at(self.edit.wrapping_sub(1)) != b'\n'
    }

    /// Removes the most recent uncommitted character.
    pub fn erase(&mut self) {
        debug_assert!(self.can_erase());
        self.edit = self.edit.wrapping_sub(1);
    }

    /// Commits everything edited so far, making it visible to readers.
    pub fn commit(&mut self) {
        self.write = self.edit;
    }

    /// True when committed data is waiting.
    pub fn has_data(&self) -> bool {
        self.read != self.write
    }

    /// Consumes the oldest committed byte.
    pub fn pop(&mut self) -> u8 {
        debug_assert!(self.has_data());
        let c = self.at(self.read);
        self.read = self.read.wrapping_add(1);
        c
    }

    /// Puts the byte just consumed back, so the next read sees it again.
    ///
    /// Used to hold an EOF over for the following read call.
    pub fn unpop(&mut self) {
        self.read = self.read.wrapping_sub(1);
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_never_exceeds_capacity() {
        let mut buf = LineBuffer::new();
        for i in 0..INPUT_BUF {
            assert!(buf.has_room());
            buf.push(i as u8);
        }
        assert!(!buf.has_room());
        assert!(buf.is_full());

        // Reading one byte opens one slot again.
        buf.commit();
        buf.pop();
        assert!(buf.has_room());
        assert!(!buf.is_full());
    }

    #[test]
    fn uncommitted_bytes_are_invisible_to_readers() {
        let mut buf = LineBuffer::new();
        buf.push(b'h');
        buf.push(b'i');
        assert!(!buf.has_data());
        assert_eq!(buf.editing(), 2);

        buf.commit();
        assert_eq!(buf.committed(), 2);
        assert_eq!(buf.pop(), b'h');
        assert_eq!(buf.pop(), b'i');
        assert!(!buf.has_data());
    }

    #[test]
    fn kill_stops_at_committed_newline() {
        let mut buf = LineBuffer::new();
        for &c in b"one\n" {
            buf.push(c);
        }
        buf.commit();
        for &c in b"two" {
            buf.push(c);
        }

        let mut erased = 0;
        while buf.can_kill() {
            buf.erase();
            erased += 1;
        }
        assert_eq!(erased, 3);
        assert_eq!(buf.committed(), 4); // "one\n" untouched
    }

    #[test]
    fn erase_never_crosses_the_commit_point() {
        let mut buf = LineBuffer::new();
        buf.push(b'a');
        buf.commit();
        assert!(!buf.can_erase());
        buf.push(b'b');
        assert!(buf.can_erase());
        buf.erase();
        assert!(!buf.can_erase());
    }

    #[test]
    fn unpop_rewinds_one_byte() {
        let mut buf = LineBuffer::new();
        buf.push(0x04);
        buf.commit();
        assert_eq!(buf.pop(), 0x04);
        assert!(!buf.has_data());
        buf.unpop();
        assert!(buf.has_data());
        assert_eq!(buf.pop(), 0x04);
    }
}
