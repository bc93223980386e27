//! Bounds-checked terminal selector.

use crate::NTERM;

/// Index of one virtual terminal, guaranteed to lie in `0..NTERM`.
///
/// Console state is addressed exclusively through this type, so an
/// out-of-range selector is rejected at construction instead of turning
/// into a wild array index deep in the output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TerminalId(u8);

impl TerminalId {
    /// Terminal 0, the terminal active at boot.
    pub const ZERO: TerminalId = TerminalId(0);

    /// Creates a terminal id, rejecting indices outside `0..NTERM`.
    pub const fn new(index: u8) -> Option<TerminalId> {
        if (index as usize) < NTERM {
            Some(TerminalId(index))
        } else {
            None
        }
    }

    /// Maps a character-device minor number to a terminal.
    ///
    /// Minor numbers are 1-based: minor 1 is terminal 0.
    pub const fn from_minor(minor: u8) -> Option<TerminalId> {
        if minor == 0 {
            None
        } else {
            TerminalId::new(minor - 1)
        }
    }

    /// Returns the index for addressing per-terminal arrays.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(TerminalId::new(0), Some(TerminalId::ZERO));
        assert!(TerminalId::new(NTERM as u8 - 1).is_some());
        assert!(TerminalId::new(NTERM as u8).is_none());
        assert!(TerminalId::new(u8::MAX).is_none());
    }

    #[test]
    fn minor_numbers_are_one_based() {
        assert_eq!(TerminalId::from_minor(0), None);
        assert_eq!(TerminalId::from_minor(1), Some(TerminalId::ZERO));
        assert_eq!(TerminalId::from_minor(6).map(TerminalId::index), Some(5));
        assert_eq!(TerminalId::from_minor(7), None);
    }
}
