//! `change_number` overwrites `number`.

#![no_std]
#![no_main]

extern crate chimera;

use core::ffi::c_int;

#[unsafe(no_mangle)]
#[allow(non_upper_case_globals)]
static mut number: c_int = 0;

#[unsafe(no_mangle)]
extern "C" fn change_number() {
    unsafe { number = 42 };
}
