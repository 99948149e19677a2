fn main() {
    // Don't link the C runtime's `_start`; chimera provides its own. In the
    // future this could be obviated by a `no_entry` feature:
    // <https://github.com/rust-lang/rfcs/pull/2735>
    println!("cargo:rustc-link-arg-bins=-nostartfiles");
}
