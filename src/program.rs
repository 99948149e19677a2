//! Program startup and shutdown.
//!
//! With the `start` feature enabled, chimera defines `_start`, and the
//! program linking it must define these two symbols:
//!
//! ```no_run
//! # use core::ffi::c_int;
//! /// The value the program exits with.
//! #[unsafe(no_mangle)]
//! static mut number: c_int = 0;
//!
//! /// Called exactly once, before `number` is read.
//! #[unsafe(no_mangle)]
//! extern "C" fn change_number() {
//!     unsafe { number = 42 };
//! }
//! ```
//!
//! Chimera calls `change_number`, reads `number`, and passes it to
//! [`exit_immediately`]. Nothing else runs: there are no constructors, no
//! `at_exit` handlers, and no I/O. Either symbol may also be defined in C,
//! as `int number;` and `void change_number(void);`.

use linux_raw_sys::ctypes::c_int;

#[cfg(feature = "start")]
unsafe extern "C" {
    /// The exit status, defined by the program linking chimera.
    static mut number: c_int;

    /// Called before `number` is read, defined by the program linking
    /// chimera.
    fn change_number();
}

/// The entrypoint where Rust code is first executed when the program starts.
///
/// # Safety
///
/// `mem` must point to the stack as provided by the operating system.
#[cfg(feature = "start")]
pub(super) unsafe extern "C" fn entry(mem: *mut usize) -> ! {
    // The incoming stack holds argc, argv, and envp, which we don't use.
    // Just check that our assembly code passed it through as expected.
    debug_assert_ne!(mem, core::ptr::null_mut());
    debug_assert_eq!(mem.addr() & 0xf, 0);

    #[cfg(feature = "log")]
    log::trace!("Calling `change_number`");

    // SAFETY: `change_number` is provided at link time and takes no
    // arguments. We're single-threaded, so nothing else touches `number`,
    // and the read is sequenced after the call returns.
    let status = unsafe {
        change_number();
        number
    };

    #[cfg(feature = "log")]
    log::trace!("`change_number` returned; `number` is `{:?}`", status);

    exit_immediately(status)
}

/// Exit the program with `status`, without running any cleanup.
///
/// This uses the raw `exit` system call, which ends the calling thread. The
/// programs chimera starts are single-threaded, so that ends the process.
/// The parent observes [`observed_status`]`(status)`.
#[inline]
pub fn exit_immediately(status: c_int) -> ! {
    #[cfg(feature = "log")]
    log::trace!("Program exiting with status `{:?}`", status);

    crate::arch::exit(status)
}

/// Immediately terminate the program by executing a trap instruction.
#[inline]
#[cold]
pub fn trap() -> ! {
    crate::arch::trap()
}

/// The exit status a parent process observes when a program exits with
/// `status`.
///
/// Linux keeps only the low 8 bits, so negative values wrap around in two's
/// complement.
#[inline]
pub const fn observed_status(status: c_int) -> u8 {
    status as u8
}

#[cfg(test)]
mod tests {
    use super::observed_status;
    use linux_raw_sys::ctypes::c_int;

    #[test]
    fn small_statuses_are_unchanged() {
        assert_eq!(observed_status(0), 0);
        assert_eq!(observed_status(8), 8);
        assert_eq!(observed_status(42), 42);
        assert_eq!(observed_status(255), 255);
    }

    #[test]
    fn large_statuses_keep_the_low_byte() {
        assert_eq!(observed_status(256), 0);
        assert_eq!(observed_status(257), 1);
        assert_eq!(observed_status(0x1234), 0x34);
        assert_eq!(observed_status(c_int::MAX), 0xff);
    }

    #[test]
    fn negative_statuses_wrap() {
        assert_eq!(observed_status(-1), 255);
        assert_eq!(observed_status(-256), 0);
        assert_eq!(observed_status(c_int::MIN), 0);
    }
}
