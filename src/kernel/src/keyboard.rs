//! PS/2 keyboard input.
//!
//! The keyboard interrupt pulls decoded characters one at a time through
//! [`poll`] until the controller has nothing further. Scancode translation
//! is done by `pc_keyboard`; Ctrl-letter combinations arrive as the matching
//! control bytes, and F1-F6 map into the console-switch code range above the
//! byte space.

use pc_keyboard::{layouts, DecodedKey, HandleControl, KeyCode, Keyboard, ScancodeSet1};
use spin::Mutex;

/// First console-switch code; F1..F6 map to `SWITCH_BASE..SWITCH_BASE + 5`.
pub const SWITCH_BASE: u16 = 151;

/// Global keyboard decoder instance.
static KEYBOARD: Mutex<Keyboard<layouts::Us104Key, ScancodeSet1>> = Mutex::new(Keyboard::new(
    ScancodeSet1::new(),
    layouts::Us104Key,
    HandleControl::MapLettersToUnicode,
));

/// Decodes one raw scancode byte into the console's input-character space.
///
/// Returns 0 when the byte completes no visible key press: releases,
/// multi-byte prefixes, and keys the console has no use for. The input path
/// skips zeros.
pub fn decode(scancode: u8) -> u16 {
    let mut keyboard = KEYBOARD.lock();
    if let Ok(Some(event)) = keyboard.add_byte(scancode) {
        if let Some(key) = keyboard.process_keyevent(event) {
            return map_key(key);
        }
    }
    0
}

/// Maps a decoded key to an input character code.
pub fn map_key(key: DecodedKey) -> u16 {
    match key {
        DecodedKey::Unicode(c) if c.is_ascii() => c as u16,
        DecodedKey::Unicode(_) => 0,
        DecodedKey::RawKey(KeyCode::F1) => SWITCH_BASE,
        DecodedKey::RawKey(KeyCode::F2) => SWITCH_BASE + 1,
        DecodedKey::RawKey(KeyCode::F3) => SWITCH_BASE + 2,
        DecodedKey::RawKey(KeyCode::F4) => SWITCH_BASE + 3,
        DecodedKey::RawKey(KeyCode::F5) => SWITCH_BASE + 4,
        DecodedKey::RawKey(KeyCode::F6) => SWITCH_BASE + 5,
        DecodedKey::RawKey(KeyCode::Delete) => 0x7f,
        DecodedKey::RawKey(_) => 0,
    }
}

/// Pulls the next decoded character from the PS/2 controller.
///
/// Non-blocking: returns `None` once the controller's output buffer is
/// empty. The interrupt handler calls this in a loop so queued bytes are
/// drained in arrival order.
#[cfg(all(target_arch = "x86_64", target_os = "none"))]
pub fn poll() -> Option<u16> {
    use x86_64::instructions::port::Port;

    /// PS/2 controller status port.
    const STATUS_PORT: u16 = 0x64;
    /// PS/2 controller data port.
    const DATA_PORT: u16 = 0x60;
    /// Status bit: output buffer holds a byte for us.
    const OUTPUT_FULL: u8 = 0x01;

    let mut status = Port::<u8>::new(STATUS_PORT);
    let mut data = Port::<u8>::new(DATA_PORT);

    // SAFETY: 0x64/0x60 are the standard PS/2 controller ports; reading the
    // data port consumes exactly the byte the status bit advertised.
    let st: u8 = unsafe { status.read() };
    if st & OUTPUT_FULL == 0 {
        return None;
    }
    let scancode: u8 = unsafe { data.read() };

    Some(decode(scancode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_keys_select_terminals() {
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::F1)), 151);
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::F6)), 156);
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(map_key(DecodedKey::Unicode('a')), b'a' as u16);
        assert_eq!(map_key(DecodedKey::Unicode('\u{15}')), 0x15); // Ctrl-U
        assert_eq!(map_key(DecodedKey::Unicode('é')), 0);
    }

    #[test]
    fn delete_maps_to_del() {
        assert_eq!(map_key(DecodedKey::RawKey(KeyCode::Delete)), 0x7f);
    }

    #[test]
    fn scancodes_decode_presses_not_releases() {
        // Set-1 scancode 0x1E is the A key; 0x9E its release.
        assert_eq!(decode(0x1E), b'a' as u16);
        assert_eq!(decode(0x9E), 0);
    }
}
