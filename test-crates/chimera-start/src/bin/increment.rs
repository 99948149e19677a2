//! `change_number` updates `number` based on its initial value.

#![no_std]
#![no_main]

extern crate chimera;

use core::ffi::c_int;

#[unsafe(no_mangle)]
#[allow(non_upper_case_globals)]
static mut number: c_int = 7;

#[unsafe(no_mangle)]
extern "C" fn change_number() {
    unsafe { number += 1 };
}
