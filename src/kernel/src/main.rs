//! Tessera kernel entry point.
//!
//! Boots, brings up the console, and runs a line-echo loop on terminal 1
//! through the character-device interface, exactly the path a shell would
//! use. F1 through F6 switch terminals; typing lands on whichever terminal
//! is active.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod kernel {
    use bootloader::{entry_point, BootInfo};
    use core::panic::PanicInfo;
    use tessera_kernel::console::CONSOLE_MAJOR;
    use tessera_kernel::{dev, fault, println, serial_println};

    entry_point!(kernel_main);

    fn kernel_main(_boot_info: &'static BootInfo) -> ! {
        tessera_kernel::init();
        log::info!("console up, {} terminals", tessera_common::NTERM);

        println!("Tessera");
        println!("F1-F6 switch terminals; Ctrl-P dumps console state.");
        println!();

        // Echo loop on terminal 1 (minor 1). Read blocks until a full line
        // is committed; a zero-byte result is end-of-input.
        let mut line = [0u8; 128];
        loop {
            match dev::read(CONSOLE_MAJOR, 1, &mut line) {
                Ok(0) => {
                    let _ = dev::write(CONSOLE_MAJOR, 1, b"(eof)\n");
                }
                Ok(n) => {
                    let _ = dev::write(CONSOLE_MAJOR, 1, b"> ");
                    let _ = dev::write(CONSOLE_MAJOR, 1, &line[..n]);
                }
                Err(err) => {
                    log::warn!("console read failed: {}", err);
                    tessera_kernel::arch::halt_forever();
                }
            }
        }
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        fault::mark();
        serial_println!("KERNEL PANIC: {}", info);
        tessera_kernel::arch::halt_forever()
    }
}

#[cfg(not(all(target_arch = "x86_64", target_os = "none")))]
fn main() {}
