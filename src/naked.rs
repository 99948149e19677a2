//! Define a function with no prologue or epilogue, entirely in assembly.
//!
//! # Example
//!
//! ```no_compile
//! naked_fn!(
//!     "
//!     A documentation comment.
//!
//!     In the macro expansion, this string will be expanded as a documentation
//!     comment for the generated code.
//!     ";
//!
//!     // Declare a `pub(crate)` function named `function_name` with no
//!     // arguments that does not return.
//!     pub(crate) fn function_name() -> !;
//!
//!     // Assembly code for the body.
//!     "assembly code here",
//!     "we can use {symbols} too",
//!
//!     // Provide symbols for use in the assembly code.
//!     symbols = sym path::to::symbols
//! );
//! ```
//!
//! The function is emitted with `global_asm`, so its name is not mangled and
//! it is visible to the linker as a global symbol.
//!
//! `#[unsafe(naked)]` functions are newer than the minimum supported Rust
//! version, so there is no `#[naked]` variant. `global_asm` also accepts
//! `sym` operands on stable, which is all `_start` needs.

#![allow(unused_macros)]

/// Declare an `extern "C"` function and emit its body with `global_asm`.
macro_rules! naked_fn {
    (
        $doc:literal;
        $vis:vis fn $name:ident $args:tt -> $ret:ty;
        $($code:literal),*;
        $($label:ident = $kind:ident $path:path),*
    ) => {
        unsafe extern "C" {
            #[doc = $doc]
            #[allow(dead_code)]
            $vis fn $name $args -> $ret;
        }
        core::arch::global_asm!(
            concat!(".global ", stringify!($name)),
            concat!(".type ", stringify!($name), ", @function"),
            concat!(stringify!($name), ":"),
            $($code),*,
            concat!(".size ", stringify!($name), ", .-", stringify!($name)),
            $($label = $kind $path),*
        );
    };
}
