//! Console diagnostics, triggered by Ctrl-P.
//!
//! Runs outside the console lock: the interrupt handler only records the
//! request and calls in here after unlocking, so the dump itself may print
//! through the ordinary console path.

use crate::println;
use tessera_common::NTERM;

/// Prints input-buffer occupancy for every terminal to the active one.
pub fn dump() {
    let Some(console) = crate::console::console() else {
        return;
    };
    let stats = console.stats();
    println!("console: active terminal {}", stats.active.index());
    for i in 0..NTERM {
        println!(
            "  terminal {}: {} committed, {} editing",
            i, stats.committed[i], stats.editing[i]
        );
    }
}
