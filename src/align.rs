//! Hardware alignment checking for the current thread.
//!
//! While an [`AlignmentGuard`] is alive, the x86 alignment-check flag
//! (EFLAGS.AC, bit 18) is set, so misaligned data accesses fault instead of
//! being silently fixed up. Whether a fault is actually raised also depends
//! on the OS enabling CR0.AM, which Linux does for user mode.
//!
//! Only one guard should be active at a time; guards do not nest.

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
compile_error!("the `align-trap` feature is only supported on x86 and x86_64");

use core::marker::PhantomData;

const AC_FLAG: usize = 1 << 18;

/// Sets EFLAGS.AC on creation and clears it on drop, unless it was already
/// set before.
#[derive(Debug)]
pub struct AlignmentGuard {
    /// Set if this guard turned the flag on and must turn it off again.
    enabled: bool,
    /// The flag belongs to the current thread.
    _not_send: PhantomData<*const ()>,
}

impl AlignmentGuard {
    /// Turns alignment checking on.
    ///
    /// # Safety
    ///
    /// Any misaligned access made while the guard is alive, including ones
    /// inside the standard library, will fault. The caller must make sure
    /// the code running under the guard performs only aligned accesses,
    /// unless a fault is the intended outcome.
    pub unsafe fn new() -> Self {
        let flags = unsafe { set_ac() };
        Self {
            enabled: flags & AC_FLAG == 0,
            _not_send: PhantomData,
        }
    }

    /// Whether this guard turned the flag on.
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}

impl Drop for AlignmentGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        unsafe { clear_ac() };
    }
}

/// Sets AC and returns the flags as they were before.
#[cfg(target_arch = "x86_64")]
unsafe fn set_ac() -> usize {
    let flags: u64;
    unsafe {
        core::arch::asm!(
            "pushfq",
            "mov {flags}, qword ptr [rsp]",
            "or dword ptr [rsp], 0x40000",
            "popfq",
            flags = out(reg) flags,
        );
    }
    flags as usize
}

#[cfg(target_arch = "x86_64")]
unsafe fn clear_ac() {
    unsafe {
        core::arch::asm!(
            "pushfq",
            "and dword ptr [rsp], 0xfffbffff",
            "popfq",
        );
    }
}

#[cfg(target_arch = "x86")]
unsafe fn set_ac() -> usize {
    let flags: u32;
    unsafe {
        core::arch::asm!(
            "pushfd",
            "mov {flags}, dword ptr [esp]",
            "or dword ptr [esp], 0x40000",
            "popfd",
            flags = out(reg) flags,
        );
    }
    flags as usize
}

#[cfg(target_arch = "x86")]
unsafe fn clear_ac() {
    unsafe {
        core::arch::asm!(
            "pushfd",
            "and dword ptr [esp], 0xfffbffff",
            "popfd",
        );
    }
}
