#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(all(target_os = "linux", target_arch = "x86_64")))]
compile_error!("chimera only supports x86_64 Linux.");

// Wrapper around `global_asm` for defining functions in assembly.
#[macro_use]
pub(crate) mod naked;

#[cfg_attr(target_arch = "x86_64", path = "arch/x86_64.rs")]
mod arch;

pub mod program;

// Provide a panic handler and personality function, if requested.
#[cfg(any(feature = "panic-handler-trap", feature = "eh-personality-continue"))]
mod stubs;

// Define `memcpy` and other functions called from LLVM codegen, if requested.
// Normally the platform libc defines these, but freestanding programs don't
// link libc.
#[cfg(feature = "mem")]
mod mem;
