//! `memcpy` etc. implementations with small code size.
//!
//! Programs linked without libc still get calls to these from LLVM codegen
//! and from dependencies such as `log`.
//!
//! This code uses `core::arch::asm!("")` to try to discourage optimizers from
//! vectorizing or pattern-matching these loops into calls to themselves.

use core::ffi::{c_char, c_int, c_void};

#[unsafe(no_mangle)]
unsafe extern "C" fn memcpy(dst: *mut c_void, src: *const c_void, len: usize) -> *mut c_void {
    let start = dst;
    let mut dst = dst.cast::<u8>();
    let mut src = src.cast::<u8>();
    // SAFETY: The caller guarantees `len` bytes are valid at both pointers.
    unsafe {
        let dst_end = dst.add(len);
        while dst < dst_end {
            *dst = *src;
            dst = dst.add(1);
            src = src.add(1);
            core::arch::asm!("");
        }
    }
    start
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memmove(dst: *mut c_void, src: *const c_void, len: usize) -> *mut c_void {
    let start = dst;
    let mut dst = dst.cast::<u8>();
    let mut src = src.cast::<u8>();
    let delta = dst.addr().wrapping_sub(src.addr());
    // SAFETY: The caller guarantees `len` bytes are valid at both pointers.
    unsafe {
        if delta >= len {
            // `dst` is far enough ahead of `src`, or behind it, so copy
            // forwards.
            let dst_end = dst.add(len);
            while dst < dst_end {
                *dst = *src;
                dst = dst.add(1);
                src = src.add(1);
                core::arch::asm!("");
            }
        } else {
            let dst_start = dst;
            dst = dst.add(len);
            src = src.add(len);
            while dst > dst_start {
                dst = dst.sub(1);
                src = src.sub(1);
                *dst = *src;
                core::arch::asm!("");
            }
        }
    }
    start
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memset(dst: *mut c_void, fill: c_int, len: usize) -> *mut c_void {
    let mut s = dst.cast::<u8>();
    // SAFETY: The caller guarantees `len` bytes are valid at `dst`.
    unsafe {
        let end = s.add(len);
        while s < end {
            *s = fill as u8;
            s = s.add(1);
            core::arch::asm!("");
        }
    }
    dst
}

#[unsafe(no_mangle)]
unsafe extern "C" fn memcmp(a: *const c_void, b: *const c_void, len: usize) -> c_int {
    let a = a.cast::<u8>();
    let b = b.cast::<u8>();
    let mut i = 0;
    while i < len {
        // SAFETY: The caller guarantees `len` bytes are valid at both
        // pointers.
        let (a, b) = unsafe { (*a.add(i), *b.add(i)) };
        if a != b {
            return c_int::from(a) - c_int::from(b);
        }
        i += 1;
        // SAFETY: An empty `asm` has no effects.
        unsafe { core::arch::asm!("") };
    }
    0
}

// Obsolescent
#[unsafe(no_mangle)]
unsafe extern "C" fn bcmp(a: *const c_void, b: *const c_void, len: usize) -> c_int {
    // SAFETY: Same contract as `memcmp`.
    unsafe { memcmp(a, b, len) }
}

#[unsafe(no_mangle)]
unsafe extern "C" fn strlen(s: *const c_char) -> usize {
    let mut s = s;
    let mut n = 0;
    // SAFETY: The caller guarantees `s` is NUL-terminated.
    unsafe {
        while *s != 0 {
            n += 1;
            s = s.add(1);
            core::arch::asm!("");
        }
    }
    n
}
