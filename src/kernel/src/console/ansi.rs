//! SGR escape-sequence interpretation.
//!
//! Each terminal runs one of these state machines over its output stream.
//! The console understands exactly the subset its programs emit: `ESC [`
//! followed by semicolon-separated decimal parameters and a terminating
//! `m`, selecting foreground (30-39) and background (40-49) colors or a
//! full reset (0). Any unexpected byte after an ESC is swallowed and
//! parsing returns to idle.

/// Attribute word for light gray on black, the reset state.
pub const DEFAULT_ATTR: u16 = 0x0700;

/// VGA attribute words for SGR foreground parameters 30-39.
///
/// Order: black, red, green, yellow, blue, magenta, cyan, white, unused,
/// default.
const FG: [u16; 10] = [
    0x0000, 0x0400, 0x0200, 0x0e00, 0x0100, 0x0500, 0x0300, 0x0f00, 0x0000, 0x0f00,
];

/// VGA attribute words for SGR background parameters 40-49, same order.
const BG: [u16; 10] = [
    0x0000, 0x4000, 0x2000, 0x6000, 0x1000, 0x5000, 0x3000, 0x0f00, 0x0000, 0x0000,
];

/// What became of a byte fed through the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The byte is ordinary output; display it.
    Emit(u8),
    /// The byte belonged to (or aborted) an escape sequence.
    Consumed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    SawEscape,
    Params,
}

/// Per-terminal escape-parser state.
#[derive(Debug, Default)]
pub struct EscapeParser {
    state: State,
    param: u16,
}

impl EscapeParser {
    /// Creates a parser in the idle state.
    pub const fn new() -> Self {
        Self {
            state: State::Idle,
            param: 0,
        }
    }

    /// Feeds one output byte, updating `attr` when a sequence completes.
    pub fn feed(&mut self, byte: u8, attr: &mut u16) -> Step {
        match self.state {
            State::Idle => {
                if byte == 0x1b {
                    self.state = State::SawEscape;
                    Step::Consumed
                } else {
                    Step::Emit(byte)
                }
            }
            State::SawEscape => {
                self.state = if byte == b'[' {
                    State::Params
                } else {
                    State::Idle
                };
                Step::Consumed
            }
            State::Params => {
                match byte {
                    b'0'..=b'9' => {
                        self.param = self
                            .param
                            .saturating_mul(10)
                            .saturating_add(u16::from(byte - b'0'));
                    }
                    b';' => {
                        Self::apply(self.param, attr);
                        self.param = 0;
                    }
                    b'm' => {
                        Self::apply(self.param, attr);
                        self.param = 0;
                        self.state = State::Idle;
                    }
                    _ => {
                        // Unrecognized byte: swallow it and give up on the
                        // sequence.
                        self.param = 0;
                        self.state = State::Idle;
                    }
                }
                Step::Consumed
            }
        }
    }

    fn apply(param: u16, attr: &mut u16) {
        match param {
            0 => *attr = DEFAULT_ATTR,
            30..=39 => *attr = (*attr & 0xf0ff) | FG[(param - 30) as usize],
            40..=49 => *attr = (*attr & 0x0fff) | BG[(param - 40) as usize],
            // Out-of-range parameters select nothing.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(parser: &mut EscapeParser, attr: &mut u16, bytes: &[u8]) -> Vec<u8> {
        let mut emitted = Vec::new();
        for &b in bytes {
            if let Step::Emit(c) = parser.feed(b, attr) {
                emitted.push(c);
            }
        }
        emitted
    }

    #[test]
    fn plain_bytes_pass_through() {
        let mut parser = EscapeParser::new();
        let mut attr = DEFAULT_ATTR;
        assert_eq!(run(&mut parser, &mut attr, b"hi"), b"hi");
        assert_eq!(attr, DEFAULT_ATTR);
    }

    #[test]
    fn red_foreground_leaves_background_alone() {
        let mut parser = EscapeParser::new();
        let mut attr = DEFAULT_ATTR | 0x4000; // red background set beforehand
        assert!(run(&mut parser, &mut attr, b"\x1b[31m").is_empty());
        assert_eq!(attr, 0x4400);
    }

    #[test]
    fn reset_restores_default_from_any_state() {
        let mut parser = EscapeParser::new();
        let mut attr = 0x1e00;
        run(&mut parser, &mut attr, b"\x1b[0m");
        assert_eq!(attr, DEFAULT_ATTR);

        // And again: resetting an already-default attribute is a no-op.
        run(&mut parser, &mut attr, b"\x1b[0m");
        assert_eq!(attr, DEFAULT_ATTR);
    }

    #[test]
    fn semicolon_applies_each_parameter() {
        let mut parser = EscapeParser::new();
        let mut attr = DEFAULT_ATTR;
        run(&mut parser, &mut attr, b"\x1b[31;44m");
        assert_eq!(attr, 0x1400); // blue background, red foreground
    }

    #[test]
    fn unexpected_byte_aborts_sequence_silently() {
        let mut parser = EscapeParser::new();
        let mut attr = DEFAULT_ATTR;
        // 'Z' is swallowed, parsing returns to idle, following text emits.
        assert_eq!(run(&mut parser, &mut attr, b"\x1b[3Zok"), b"ok");
        assert_eq!(attr, DEFAULT_ATTR);

        // A lone ESC followed by a non-bracket swallows just that byte.
        assert_eq!(run(&mut parser, &mut attr, b"\x1bXyes"), b"yes");
    }

    #[test]
    fn out_of_range_parameters_are_ignored() {
        let mut parser = EscapeParser::new();
        let mut attr = DEFAULT_ATTR;
        run(&mut parser, &mut attr, b"\x1b[99m");
        assert_eq!(attr, DEFAULT_ATTR);
    }
}
