//! Shared types for the Tessera kernel crates.

#![cfg_attr(not(test), no_std)]

pub mod error;
mod id;

pub use error::DevError;
pub use id::TerminalId;

/// Number of virtual terminals multiplexed onto the physical display.
pub const NTERM: usize = 6;
