//! Freestanding smoke test: boots far enough to print through the console
//! and the serial port. Run under QEMU with the isa-debug-exit device.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]
#![cfg_attr(target_os = "none", feature(custom_test_frameworks))]
#![cfg_attr(target_os = "none", test_runner(tessera_kernel::testutil::test_runner))]
#![cfg_attr(target_os = "none", reexport_test_harness_main = "test_main")]

#[cfg(all(target_arch = "x86_64", target_os = "none"))]
mod qemu {
    use core::panic::PanicInfo;
    use tessera_kernel::testutil::{exit_qemu, QemuExitCode};
    use tessera_kernel::{println, serial_println};

    #[no_mangle]
    pub extern "C" fn _start() -> ! {
        tessera_kernel::init();
        crate::test_main();
        exit_qemu(QemuExitCode::Success);
        tessera_kernel::arch::halt_forever()
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        tessera_kernel::testutil::test_panic_handler(info)
    }

    #[test_case]
    fn println_does_not_panic() {
        println!("console output works");
    }

    #[test_case]
    fn serial_output_works() {
        serial_println!("serial output works");
    }

    #[test_case]
    fn serial_usable_with_interrupts_enabled() {
        // init() has already enabled the keyboard interrupt, which mirrors
        // echo into the same port these writes lock.
        for _ in 0..100 {
            serial_println!("serial under interrupt load");
        }
    }

    #[test_case]
    fn console_write_is_synchronous() {
        use tessera_kernel::console::CONSOLE_MAJOR;
        use tessera_kernel::dev;

        // A write to a background terminal completes without blocking and
        // reports the full length.
        assert_eq!(dev::write(CONSOLE_MAJOR, 2, b"background"), Ok(10));
    }
}
