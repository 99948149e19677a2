//! `change_number` runs exactly once, and `number` is read after it returns.

#![no_std]
#![no_main]

extern crate chimera;

use core::ffi::c_int;

static mut CALLS: c_int = 0;

#[unsafe(no_mangle)]
#[allow(non_upper_case_globals)]
static mut number: c_int = -1;

#[unsafe(no_mangle)]
extern "C" fn change_number() {
    unsafe {
        CALLS += 1;
        number = CALLS;
    }
}
