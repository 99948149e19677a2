//! Only the low 8 bits of the exit status are visible to the parent.

#![no_std]
#![no_main]

extern crate chimera;

use core::ffi::c_int;

#[unsafe(no_mangle)]
#[allow(non_upper_case_globals)]
static mut number: c_int = 0;

#[unsafe(no_mangle)]
extern "C" fn change_number() {
    unsafe { number = 256 };
}
