//! Character-device switch table.
//!
//! Drivers register under a major number; the minor number is carried
//! through to the driver, which uses it to select a sub-device (the console
//! maps minors 1-6 to its terminals). Callers at the filesystem layer are
//! expected to drop any inode-level lock before calling in, because `read`
//! may block until input arrives.

use spin::Mutex;
use tessera_common::DevError;

/// Number of major-device slots.
pub const NDEV: usize = 10;

/// A registered character device.
pub trait CharDevice: Sync {
    /// Reads up to `buf.len()` bytes; may block until data is available.
    fn read(&self, minor: u8, buf: &mut [u8]) -> Result<usize, DevError>;

    /// Writes the whole buffer synchronously.
    fn write(&self, minor: u8, buf: &[u8]) -> Result<usize, DevError>;
}

static DEVICES: Mutex<[Option<&'static dyn CharDevice>; NDEV]> = Mutex::new([None; NDEV]);

/// Registers `device` under `major`, replacing any previous driver.
pub fn register(major: usize, device: &'static dyn CharDevice) {
    assert!(major < NDEV, "device major out of range");
    DEVICES.lock()[major] = Some(device);
}

/// Looks a driver up without holding the table lock across the call, so a
/// blocking read cannot stall registration.
fn lookup(major: usize) -> Result<&'static dyn CharDevice, DevError> {
    DEVICES
        .lock()
        .get(major)
        .copied()
        .flatten()
        .ok_or(DevError::NoDevice)
}

/// Reads from device `major`/`minor`.
pub fn read(major: usize, minor: u8, buf: &mut [u8]) -> Result<usize, DevError> {
    lookup(major)?.read(minor, buf)
}

/// Writes to device `major`/`minor`.
pub fn write(major: usize, minor: u8, buf: &[u8]) -> Result<usize, DevError> {
    lookup(major)?.write(minor, buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl CharDevice for Upper {
        fn read(&self, minor: u8, buf: &mut [u8]) -> Result<usize, DevError> {
            buf.fill(minor);
            Ok(buf.len())
        }

        fn write(&self, _minor: u8, buf: &[u8]) -> Result<usize, DevError> {
            Ok(buf.len())
        }
    }

    static UPPER: Upper = Upper;

    #[test]
    fn routes_to_registered_driver() {
        register(9, &UPPER);
        let mut buf = [0u8; 4];
        assert_eq!(read(9, 3, &mut buf), Ok(4));
        assert_eq!(buf, [3, 3, 3, 3]);
        assert_eq!(write(9, 3, b"xy"), Ok(2));
    }

    #[test]
    fn unregistered_major_is_an_error() {
        let mut buf = [0u8; 1];
        assert_eq!(read(8, 1, &mut buf), Err(DevError::NoDevice));
        assert_eq!(write(8, 1, b"z"), Err(DevError::NoDevice));
    }
}
