//! System-wide error types for Tessera.

use core::fmt;

/// Character-device error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DevError {
    /// The calling task was killed while blocked on the device.
    Interrupted,
    /// No driver registered under the requested major number.
    NoDevice,
    /// The minor number does not select a valid sub-device.
    BadMinor,
}

impl fmt::Display for DevError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevError::Interrupted => write!(f, "killed while waiting"),
            DevError::NoDevice => write!(f, "no such device"),
            DevError::BadMinor => write!(f, "bad minor number"),
        }
    }
}
