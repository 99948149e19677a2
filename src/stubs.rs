//! Stubs for freestanding programs that don't have std's panic and unwinding
//! support.
//!
//! There's nothing to report a panic to and no way to unwind out of
//! `_start`, so panics just trap.

// If requested, provide a personality function that never catches anything.
// The prebuilt `core` references `rust_eh_personality` even when the program
// is built with `panic = "abort"`.
#[cfg(feature = "eh-personality-continue")]
#[unsafe(no_mangle)]
unsafe extern "C" fn rust_eh_personality(
    version: core::ffi::c_int,
    _actions: core::ffi::c_int,
    _exception_class: u64,
    _exception: *mut core::ffi::c_void,
    _ctx: *mut core::ffi::c_void,
) -> core::ffi::c_int {
    if version != 1 {
        return 3; // UnwindReasonCode::FATAL_PHASE1_ERROR
    }
    8 // UnwindReasonCode::CONTINUE_UNWIND
}

#[cfg(feature = "panic-handler-trap")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    crate::arch::trap()
}
