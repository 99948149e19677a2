//! Architecture-specific assembly code.

use core::arch::asm;
use linux_raw_sys::ctypes::c_int;
use linux_raw_sys::general::__NR_exit;

#[cfg(feature = "start")]
naked_fn!(
    "
    The program entry point.

    # Safety

    This function must never be called explicitly. It is the first thing
    executed in the program, and it assumes that memory is laid out according
    to the operating system convention for starting a new program.
    ";
    pub(super) fn _start() -> !;

    // Jump to `entry`, passing it the initial stack pointer value as an
    // argument, a null return address, a null frame pointer, and an aligned
    // stack pointer.
    "xor ebp,ebp", // Zero the frame pointer.
    "mov rdi,rsp", // Pass the incoming `rsp` as the arg to `entry`.
    "push rbp",    // Set the return address to zero.
    "jmp {entry}"; // Jump to `entry`.
    entry = sym super::program::entry
);

/// Invoke the `__NR_exit` system call.
///
/// This terminates the calling thread; in a single-threaded process that is
/// the whole process. Only the low 8 bits of `code` are visible to the
/// parent.
#[inline]
pub(super) fn exit(code: c_int) -> ! {
    // SAFETY: `exit` takes no pointers and doesn't return. If it ever did,
    // `ud2` traps.
    unsafe {
        asm!(
            "syscall",
            "ud2",
            in("rax") __NR_exit as usize,
            in("rdi") code,
            options(noreturn, nostack)
        )
    }
}

/// Execute a trap instruction.
#[inline]
pub(super) fn trap() -> ! {
    // SAFETY: `ud2` raises `SIGILL` and doesn't return.
    unsafe { asm!("ud2", options(noreturn, nostack)) }
}
