//! The virtual-terminal console.
//!
//! Six terminals share one physical text display and one keyboard. Each
//! terminal keeps its own screen buffer, color state, and line-edited input
//! buffer; exactly one terminal is active (mirrored to the hardware) at a
//! time. Output may be directed at any terminal without making it visible;
//! keyboard input always feeds the active one. Every emitted character is
//! also forwarded to the serial mirror in display order.
//!
//! # Locking
//!
//! One interrupt-safe lock serializes everything: the keyboard interrupt,
//! blocking readers, and writers all mutate the same terminal array and the
//! same hardware sink. Only `read` ever suspends, and it holds nothing but
//! the console lock, which it releases before sleeping on the terminal's
//! wait channel.

mod ansi;
mod input;
mod terminal;

use crate::fault;
use crate::keyboard::SWITCH_BASE;
use crate::sync::{IntrMutex, WaitChannel};
use crate::task;
use core::fmt;
use tessera_common::{DevError, TerminalId, NTERM};
use tessera_hal::{Serial, TextDisplay};

use terminal::{cell, Terminal};

/// Rows in the character grid.
pub const ROWS: usize = 25;

/// Columns in the character grid.
pub const COLS: usize = 80;

/// Total cells per terminal.
const GRID_CELLS: usize = ROWS * COLS;

/// Out-of-band output code that rubs out one echoed character.
const BACKSPACE: u16 = 0x100;

const fn ctrl(c: u8) -> u8 {
    c - b'@'
}

const CTRL_D: u8 = ctrl(b'D');
const CTRL_H: u8 = ctrl(b'H');
const CTRL_P: u8 = ctrl(b'P');
const CTRL_U: u8 = ctrl(b'U');
const DEL: u8 = 0x7f;

/// Maps a console-switch input code (151-156) to its terminal.
fn switch_target(c: u16) -> Option<TerminalId> {
    let offset = c.checked_sub(SWITCH_BASE)?;
    if (offset as usize) < NTERM {
        TerminalId::new(offset as u8)
    } else {
        None
    }
}

/// Work the interrupt path deferred past the console lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterruptOutcome {
    /// Ctrl-P asked for a diagnostic dump; run it with the lock released.
    pub dump_requested: bool,
}

/// Occupancy snapshot for the diagnostic dump.
#[derive(Debug, Clone, Copy)]
pub struct Stats {
    /// The terminal currently mirrored to the hardware.
    pub active: TerminalId,
    /// Committed-but-unread input bytes, per terminal.
    pub committed: [u32; NTERM],
    /// Typed-but-uncommitted input bytes, per terminal.
    pub editing: [u32; NTERM],
}

/// The console: all terminal state, the hardware sink, and the mirror,
/// behind a single interrupt-safe lock.
pub struct Console<D: TextDisplay, S: Serial> {
    mux: IntrMutex<Muxer<D, S>>,
    /// One wakeup channel per terminal; blocked readers key on these by
    /// index, never by pointer, so switching terminals cannot invalidate a
    /// waiter.
    readers: [WaitChannel; NTERM],
}

struct Muxer<D, S> {
    terminals: [Terminal; NTERM],
    /// The terminal mirrored to the hardware.
    active: TerminalId,
    /// The terminal receiving the next output byte. Equal to `active`
    /// whenever the lock is free; a write retargets it for the duration of
    /// the call only.
    target: TerminalId,
    display: D,
    mirror: S,
}

impl<D: TextDisplay, S: Serial> Console<D, S> {
    /// Creates a console over the given display and serial mirror, with
    /// terminal 0 active.
    pub fn new(display: D, mirror: S) -> Self {
        const TERMINAL: Terminal = Terminal::new();
        const CHANNEL: WaitChannel = WaitChannel::new();
        Self {
            mux: IntrMutex::new(Muxer {
                terminals: [TERMINAL; NTERM],
                active: TerminalId::ZERO,
                target: TerminalId::ZERO,
                display,
                mirror,
            }),
            readers: [CHANNEL; NTERM],
        }
    }

    /// Interrupt-path entry: pulls decoded characters from `next` until it
    /// runs dry, feeding the line discipline of the active terminal.
    ///
    /// Echo, switching, and line editing all happen here under the lock;
    /// anything that must not run with the lock held (the diagnostic dump)
    /// is reported back in the outcome instead.
    pub fn handle_input<F: FnMut() -> Option<u16>>(&self, mut next: F) -> InterruptOutcome {
        let mut outcome = InterruptOutcome::default();
        let mut mux = self.mux.lock();

        while let Some(c) = next() {
            if let Some(t) = switch_target(c) {
                mux.switch_to(t);
                continue;
            }
            let byte = match u8::try_from(c) {
                Ok(b) => b,
                Err(_) => continue,
            };
            match byte {
                0 => {}
                CTRL_P => outcome.dump_requested = true,
                CTRL_U => {
                    while mux.terminals[mux.active.index()].input.can_kill() {
                        mux.erase_one();
                    }
                }
                CTRL_H | DEL => {
                    if mux.terminals[mux.active.index()].input.can_erase() {
                        mux.erase_one();
                    }
                }
                _ => {
                    let byte = if byte == b'\r' { b'\n' } else { byte };
                    let idx = mux.active.index();
                    if mux.terminals[idx].input.has_room() {
                        mux.terminals[idx].input.push(byte);
                        mux.putc(u16::from(byte));
                        let input = &mut mux.terminals[idx].input;
                        if byte == b'\n' || byte == CTRL_D || input.is_full() {
                            input.commit();
                            self.readers[idx].notify();
                        }
                    }
                }
            }
        }
        outcome
    }

    /// Blocking line-oriented read from one terminal.
    ///
    /// Sleeps while no committed input is available, waking per line. A
    /// Ctrl-D is consumed, but if bytes were already produced this call it
    /// is pushed back so the *next* read returns zero bytes, signalling
    /// end-of-input without losing data. Stops early at a newline. Returns
    /// `Err(DevError::Interrupted)` if the task was killed while waiting.
    pub fn read(&self, id: TerminalId, dst: &mut [u8]) -> Result<usize, DevError> {
        let mut mux = self.mux.lock();
        let mut n = 0;

        while n < dst.len() {
            while !mux.terminals[id.index()].input.has_data() {
                if task::current_killed() {
                    return Err(DevError::Interrupted);
                }
                mux = self.readers[id.index()].sleep(mux);
            }
            let c = mux.terminals[id.index()].input.pop();
            if c == CTRL_D {
                if n > 0 {
                    // Save the EOF for next time, so the caller still gets
                    // a zero-byte result.
                    mux.terminals[id.index()].input.unpop();
                }
                break;
            }
            dst[n] = c;
            n += 1;
            if c == b'\n' {
                break;
            }
        }
        Ok(n)
    }

    /// Synchronous write to one terminal, visible or not.
    ///
    /// Retargets output for the duration of the call and restores the
    /// target to the active terminal before releasing the lock. Never
    /// suspends; scrolling guarantees the display cannot fill up.
    pub fn write(&self, id: TerminalId, buf: &[u8]) -> usize {
        let mut mux = self.mux.lock();
        mux.target = id;
        for &b in buf {
            mux.putc(u16::from(b));
        }
        mux.target = mux.active;
        buf.len()
    }

    /// Writes to whichever terminal is currently active.
    ///
    /// This is the path behind `print!`: kernel messages follow the user's
    /// chosen terminal.
    pub fn write_active(&self, s: &str) {
        let mut mux = self.mux.lock();
        for &b in s.as_bytes() {
            mux.putc(u16::from(b));
        }
    }

    /// Snapshot of input-buffer occupancy for diagnostics.
    pub fn stats(&self) -> Stats {
        let mux = self.mux.lock();
        let mut committed = [0; NTERM];
        let mut editing = [0; NTERM];
        for (i, term) in mux.terminals.iter().enumerate() {
            committed[i] = term.input.committed();
            editing[i] = term.input.editing();
        }
        Stats {
            active: mux.active,
            committed,
            editing,
        }
    }

    #[cfg(test)]
    fn with_state<R>(&self, f: impl FnOnce(&Muxer<D, S>) -> R) -> R {
        f(&self.mux.lock())
    }
}

impl<D: TextDisplay, S: Serial> Muxer<D, S> {
    /// Erases one uncommitted character from the active terminal and echoes
    /// the rub-out.
    fn erase_one(&mut self) {
        self.terminals[self.active.index()].input.erase();
        self.putc(BACKSPACE);
    }

    /// Emits one character: serial mirror first, then the display path.
    ///
    /// Inert once the fatal latch is set.
    fn putc(&mut self, c: u16) {
        if fault::panicked() {
            return;
        }
        if c == BACKSPACE {
            // Expand to back-up, space, back-up for dumb terminals.
            self.mirror.write_byte(0x08);
            self.mirror.write_byte(b' ');
            self.mirror.write_byte(0x08);
        } else {
            self.mirror.write_byte(c as u8);
        }
        self.display_putc(c);
    }

    /// The display half of `putc`: updates the target terminal's buffer
    /// and, iff that terminal is active, the physical display in lock-step.
    fn display_putc(&mut self, c: u16) {
        let Muxer {
            terminals,
            active,
            target,
            display,
            ..
        } = self;
        let is_active = *target == *active;
        let term = &mut terminals[target.index()];
        let mut pos = display.cursor();

        if c == u16::from(b'\n') {
            if is_active {
                pos += COLS - pos % COLS;
            }
            term.newline();
        } else if c == BACKSPACE {
            if is_active && pos > 0 {
                pos -= 1;
            }
            term.rub_out();
        } else {
            match term.parser.feed(c as u8, &mut term.attr) {
                ansi::Step::Emit(glyph) => {
                    if is_active {
                        display.write_cell(pos, cell(glyph, term.attr));
                        pos += 1;
                    }
                    term.put(glyph);
                }
                ansi::Step::Consumed => return,
            }
        }

        if pos > GRID_CELLS || term.cursor > GRID_CELLS {
            fault::fatal("console: cursor out of range");
        }

        if is_active && pos >= GRID_CELLS {
            // Hardware scroll: drop the top row, blank the freed tail.
            for i in COLS..GRID_CELLS {
                let moved = display.read_cell(i);
                display.write_cell(i - COLS, moved);
            }
            pos -= COLS;
            for i in pos..GRID_CELLS {
                display.write_cell(i, 0);
            }
        }
        if term.needs_scroll() {
            term.scroll_up();
        }

        if is_active {
            display.set_cursor(pos);
            display.write_cell(pos, cell(b' ', term.attr));
        }
    }

    /// Makes `t` the active terminal: blanks the display, replays the new
    /// terminal's buffer, and moves the hardware cursor to its position.
    ///
    /// O(rows * cols), acceptable because it only runs on an explicit
    /// hotkey.
    fn switch_to(&mut self, t: TerminalId) {
        if self.active == t && self.target == t {
            return;
        }
        let Muxer {
            terminals,
            active,
            target,
            display,
            ..
        } = self;

        // Blank everything the outgoing terminal had on screen.
        let mut pos = display.cursor();
        let old_attr = terminals[active.index()].attr;
        while pos > 0 {
            pos -= 1;
            display.write_cell(pos, cell(b' ', old_attr));
        }

        *active = t;
        *target = t;

        let term = &terminals[t.index()];
        for (i, &c) in term.grid[..term.cursor].iter().enumerate() {
            display.write_cell(i, c);
        }
        display.set_cursor(term.cursor);
        display.write_cell(term.cursor, cell(b' ', term.attr));
    }
}

impl<D: TextDisplay + Send, S: Serial + Send> crate::dev::CharDevice for Console<D, S> {
    fn read(&self, minor: u8, buf: &mut [u8]) -> Result<usize, DevError> {
        let id = TerminalId::from_minor(minor).ok_or(DevError::BadMinor)?;
        Console::read(self, id, buf)
    }

    fn write(&self, minor: u8, buf: &[u8]) -> Result<usize, DevError> {
        let id = TerminalId::from_minor(minor).ok_or(DevError::BadMinor)?;
        Ok(Console::write(self, id, buf))
    }
}

/// `fmt::Write` adapter targeting the console's active terminal.
pub struct ActiveWriter<'a, D: TextDisplay, S: Serial>(pub &'a Console<D, S>);

impl<D: TextDisplay, S: Serial> fmt::Write for ActiveWriter<'_, D, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.write_active(s);
        Ok(())
    }
}

/// Prints to the active terminal without a newline.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::console::_print(format_args!($($arg)*))
    };
}

/// Prints to the active terminal with a newline.
#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => ($crate::print!("{}\n", format_args!($($arg)*)))
}

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod hw {
    use super::{ActiveWriter, Console};
    use crate::arch::x86_64::serial::UartMirror;
    use crate::arch::x86_64::vga::VgaDisplay;
    use crate::dev;
    use core::fmt;

    /// Device major number the console registers under.
    pub const CONSOLE_MAJOR: usize = 1;

    /// The kernel's console singleton.
    static CONSOLE: spin::Once<Console<VgaDisplay, UartMirror>> = spin::Once::new();

    /// Creates the console and registers it in the device table.
    pub fn init() {
        let console = CONSOLE.call_once(|| Console::new(VgaDisplay::new(), UartMirror));
        dev::register(CONSOLE_MAJOR, console);
    }

    /// The console singleton, if initialized.
    pub fn console() -> Option<&'static Console<VgaDisplay, UartMirror>> {
        CONSOLE.get()
    }

    /// Keyboard-interrupt entry: drains the PS/2 controller through the
    /// input path, then runs any deferred diagnostics with the lock
    /// released.
    pub fn keyboard_interrupt() {
        if let Some(console) = CONSOLE.get() {
            let outcome = console.handle_input(crate::keyboard::poll);
            if outcome.dump_requested {
                crate::diag::dump();
            }
        }
    }

    /// Internal print function used by the `print!` macros.
    #[doc(hidden)]
    pub fn _print(args: fmt::Arguments) {
        use core::fmt::Write;
        if let Some(console) = CONSOLE.get() {
            let _ = ActiveWriter(console).write_fmt(args);
        }
    }
}

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub use hw::{_print, console, init, keyboard_interrupt, CONSOLE_MAJOR};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::SWITCH_BASE;

    struct MockDisplay {
        cells: [u16; GRID_CELLS],
        cursor: usize,
    }

    impl MockDisplay {
        fn new() -> Self {
            Self {
                cells: [0; GRID_CELLS],
                cursor: 0,
            }
        }
    }

    impl TextDisplay for MockDisplay {
        fn cursor(&mut self) -> usize {
            self.cursor
        }

        fn set_cursor(&mut self, pos: usize) {
            self.cursor = pos;
        }

        fn write_cell(&mut self, pos: usize, cell: u16) {
            self.cells[pos] = cell;
        }

        fn read_cell(&mut self, pos: usize) -> u16 {
            self.cells[pos]
        }
    }

    #[derive(Default)]
    struct MockSerial(Vec<u8>);

    impl Serial for MockSerial {
        fn write_byte(&mut self, byte: u8) {
            self.0.push(byte);
        }

        fn read_byte(&mut self) -> Option<u8> {
            None
        }
    }

    fn console() -> Console<MockDisplay, MockSerial> {
        Console::new(MockDisplay::new(), MockSerial::default())
    }

    fn type_in(console: &Console<MockDisplay, MockSerial>, codes: &[u16]) -> InterruptOutcome {
        let mut it = codes.iter().copied();
        console.handle_input(|| it.next())
    }

    fn type_str(console: &Console<MockDisplay, MockSerial>, s: &str) -> InterruptOutcome {
        let codes: Vec<u16> = s.bytes().map(u16::from).collect();
        type_in(console, &codes)
    }

    const T0: TerminalId = TerminalId::ZERO;

    fn term(n: u8) -> TerminalId {
        TerminalId::new(n).unwrap()
    }

    #[test]
    fn typed_line_is_echoed_and_read_in_order() {
        let console = console();
        type_str(&console, "abc\n");

        let mut buf = [0u8; 16];
        assert_eq!(console.read(T0, &mut buf), Ok(4));
        assert_eq!(&buf[..4], b"abc\n");

        console.with_state(|mux| {
            assert_eq!(mux.display.cells[0], cell(b'a', ansi::DEFAULT_ATTR));
            assert_eq!(mux.display.cells[1], cell(b'b', ansi::DEFAULT_ATTR));
            assert_eq!(mux.display.cells[2], cell(b'c', ansi::DEFAULT_ATTR));
            // Echo reached the serial mirror in the same order.
            assert_eq!(mux.mirror.0, b"abc\n");
        });
    }

    #[test]
    fn reader_sees_nothing_until_commit() {
        let console = console();
        type_str(&console, "partial");
        let stats = console.stats();
        assert_eq!(stats.committed[0], 0);
        assert_eq!(stats.editing[0], 7);

        type_str(&console, "\n");
        assert_eq!(console.stats().committed[0], 8);
    }

    #[test]
    fn lone_eof_yields_one_empty_read() {
        let console = console();
        type_in(&console, &[u16::from(CTRL_D)]);

        let mut buf = [0u8; 8];
        assert_eq!(console.read(T0, &mut buf), Ok(0));
        // The EOF was consumed; nothing is left behind.
        assert_eq!(console.stats().committed[0], 0);
    }

    #[test]
    fn eof_after_data_frames_two_reads() {
        let console = console();
        type_str(&console, "ok");
        type_in(&console, &[u16::from(CTRL_D)]);

        let mut buf = [0u8; 8];
        assert_eq!(console.read(T0, &mut buf), Ok(2));
        assert_eq!(&buf[..2], b"ok");
        // The held-back EOF now yields the zero-byte result.
        assert_eq!(console.read(T0, &mut buf), Ok(0));
    }

    #[test]
    fn backspace_edits_and_echoes_rub_out() {
        let console = console();
        type_str(&console, "ab");
        type_in(&console, &[u16::from(CTRL_H)]);
        type_str(&console, "c\n");

        let mut buf = [0u8; 8];
        assert_eq!(console.read(T0, &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"ac\n");

        console.with_state(|mux| {
            // The display cell was overwritten in place.
            assert_eq!(mux.display.cells[1], cell(b'c', ansi::DEFAULT_ATTR));
            // The mirror saw the expanded rub-out sequence.
            assert_eq!(mux.mirror.0, b"ab\x08 \x08c\n");
        });
    }

    #[test]
    fn kill_line_erases_back_to_last_newline() {
        let console = console();
        type_str(&console, "first\n");
        type_str(&console, "doomed");
        type_in(&console, &[u16::from(CTRL_U)]);
        type_str(&console, "x\n");

        let mut buf = [0u8; 16];
        assert_eq!(console.read(T0, &mut buf), Ok(6));
        assert_eq!(&buf[..6], b"first\n");
        assert_eq!(console.read(T0, &mut buf), Ok(2));
        assert_eq!(&buf[..2], b"x\n");
    }

    #[test]
    fn carriage_return_is_normalized() {
        let console = console();
        type_str(&console, "hi\r");
        let mut buf = [0u8; 8];
        assert_eq!(console.read(T0, &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"hi\n");
    }

    #[test]
    fn full_buffer_commits_and_drops_overflow() {
        let console = console();
        let codes: Vec<u16> = core::iter::repeat(u16::from(b'a'))
            .take(input::INPUT_BUF + 10)
            .collect();
        type_in(&console, &codes);

        let stats = console.stats();
        assert_eq!(stats.committed[0], input::INPUT_BUF as u32);
        assert_eq!(stats.editing[0], 0);

        let mut buf = [0u8; input::INPUT_BUF];
        assert_eq!(console.read(T0, &mut buf), Ok(input::INPUT_BUF));
        assert!(buf.iter().all(|&c| c == b'a'));
        // The overflow bytes were dropped, not queued.
        assert_eq!(console.stats().committed[0], 0);
    }

    /// Serializes the tests that touch the process-wide kill flag.
    static KILL_FLAG: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn killed_reader_returns_instead_of_sleeping() {
        let _serialized = KILL_FLAG.lock().unwrap_or_else(|e| e.into_inner());
        let console = console();
        task::kill_current();
        let mut buf = [0u8; 4];
        let result = console.read(T0, &mut buf);
        task::clear_killed();
        assert_eq!(result, Err(DevError::Interrupted));
    }

    #[test]
    fn kill_wakes_a_blocked_reader() {
        let _serialized = KILL_FLAG.lock().unwrap_or_else(|e| e.into_inner());
        let console = std::sync::Arc::new(console());

        // Block a reader on an empty buffer, then kill it from outside; the
        // wait must observe the flag and return instead of sleeping until a
        // line arrives.
        let reader = {
            let console = std::sync::Arc::clone(&console);
            std::thread::spawn(move || {
                let mut buf = [0u8; 4];
                console.read(T0, &mut buf)
            })
        };
        std::thread::sleep(std::time::Duration::from_millis(50));
        task::kill_current();
        let result = reader.join().unwrap();
        task::clear_killed();
        assert_eq!(result, Err(DevError::Interrupted));
    }

    #[test]
    fn ctrl_p_defers_a_dump_and_stores_nothing() {
        let console = console();
        let outcome = type_in(&console, &[u16::from(CTRL_P)]);
        assert!(outcome.dump_requested);
        let stats = console.stats();
        assert_eq!(stats.committed[0], 0);
        assert_eq!(stats.editing[0], 0);
    }

    #[test]
    fn twenty_five_newlines_scroll_once() {
        let console = console();
        console.write(T0, b"A\nB\n");
        for _ in 0..23 {
            console.write(T0, b"\n");
        }

        console.with_state(|mux| {
            // Row 0 ('A') was discarded; 'B' is now the top visible row.
            assert_eq!(mux.display.cells[0], cell(b'B', ansi::DEFAULT_ATTR));
            // Cursor rests at row 24, column 0.
            assert_eq!(mux.display.cursor, (ROWS - 1) * COLS);
            assert_eq!(mux.terminals[0].cursor, (ROWS - 1) * COLS);
            assert_eq!(mux.terminals[0].grid[0], cell(b'B', ansi::DEFAULT_ATTR));
        });
    }

    #[test]
    fn writes_to_background_terminal_stay_off_screen() {
        let console = console();
        console.write(term(1), b"hello");

        console.with_state(|mux| {
            assert!(mux.display.cells.iter().all(|&c| c == 0));
            assert_eq!(mux.display.cursor, 0);
            assert_eq!(mux.terminals[1].grid[0], cell(b'h', ansi::DEFAULT_ATTR));
            assert_eq!(mux.terminals[1].cursor, 5);
            // The target snapped back to the active terminal.
            assert_eq!(mux.target, mux.active);
        });
    }

    #[test]
    fn switching_replays_the_background_buffer() {
        let console = console();
        console.write(T0, b"front");
        console.write(term(1), b"back");

        type_in(&console, &[SWITCH_BASE + 1]);

        console.with_state(|mux| {
            assert_eq!(mux.active, term(1));
            for (i, &g) in b"back".iter().enumerate() {
                assert_eq!(mux.display.cells[i], cell(g, ansi::DEFAULT_ATTR));
            }
            // The old terminal's fifth cell was blanked.
            assert_eq!(mux.display.cells[4], cell(b' ', ansi::DEFAULT_ATTR));
            assert_eq!(mux.display.cursor, 4);
        });

        // Input now lands on terminal 1.
        type_str(&console, "in\n");
        let mut buf = [0u8; 8];
        assert_eq!(console.read(term(1), &mut buf), Ok(3));
        assert_eq!(&buf[..3], b"in\n");
        assert_eq!(console.stats().committed[0], 0);
    }

    #[test]
    fn sgr_colors_tag_stored_cells() {
        let console = console();
        console.write(T0, b"\x1b[31mX\x1b[0mY");

        console.with_state(|mux| {
            assert_eq!(mux.display.cells[0], cell(b'X', 0x0400));
            assert_eq!(mux.display.cells[1], cell(b'Y', ansi::DEFAULT_ATTR));
            // Escape bytes themselves never reached the grid.
            assert_eq!(mux.terminals[0].cursor, 2);
        });
    }

    #[test]
    fn switch_codes_are_not_line_input() {
        let console = console();
        type_in(&console, &[SWITCH_BASE + 2, SWITCH_BASE]);
        let stats = console.stats();
        assert_eq!(stats.active, T0);
        assert!(stats.editing.iter().all(|&n| n == 0));
    }
}
