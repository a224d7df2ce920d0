//! Triggers an alignment fault on purpose.
//!
//! Run with `--features align-trap`. On a system that honours EFLAGS.AC the
//! process dies with SIGBUS before printing anything.

use std::hint::black_box;

use rand::Rng;
use slist_collections::align::AlignmentGuard;

/// Stores `value` at `ptr` with a plain 32-bit move, whatever the alignment.
///
/// A misaligned store through a Rust pointer would be undefined behaviour, so
/// the write goes through assembly.
#[cfg(target_arch = "x86_64")]
unsafe fn store_u32(ptr: *mut u8, value: u32) {
    unsafe {
        core::arch::asm!(
            "mov dword ptr [{ptr}], {value:e}",
            ptr = in(reg) ptr,
            value = in(reg) value,
            options(nostack, preserves_flags),
        );
    }
}

#[cfg(target_arch = "x86")]
unsafe fn store_u32(ptr: *mut u8, value: u32) {
    unsafe {
        core::arch::asm!(
            "mov dword ptr [{ptr}], {value}",
            ptr = in(reg) ptr,
            value = in(reg) value,
            options(nostack, preserves_flags),
        );
    }
}

fn main() {
    let value: u32 = rand::rng().random();
    let mut buf = [0u8; 4096];

    let _guard = unsafe { AlignmentGuard::new() };
    unsafe { store_u32(black_box(buf.as_mut_ptr().add(1)), value) };

    let sum = black_box(&buf).iter().map(|&b| u32::from(b)).sum::<u32>();
    println!("{sum}");
}
