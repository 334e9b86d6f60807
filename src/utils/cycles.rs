//! CPU cycle counter, sampled next to wall-clock time when the `cpu_cycles`
//! feature is enabled.

/// Read the current CPU cycle counter / timer.
///
/// On x86_64: Uses RDTSC with LFENCE for serialization.
/// On aarch64: Uses CNTVCT_EL0 (virtual timer, accessible from userspace).
/// Elsewhere: `None`.
#[inline(always)]
pub fn read_cycles() -> Option<u64> {
    #[cfg(target_arch = "x86_64")]
    {
        Some(read_cycles_x86_64())
    }

    #[cfg(target_arch = "aarch64")]
    {
        Some(read_cycles_aarch64())
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    {
        None
    }
}

#[cfg(target_arch = "x86_64")]
#[inline(always)]
fn read_cycles_x86_64() -> u64 {
    use core::arch::x86_64::*;
    unsafe {
        // LFENCE prevents speculative execution from affecting RDTSC
        _mm_lfence();
        let cycles = _rdtsc();
        _mm_lfence();
        cycles
    }
}

#[cfg(target_arch = "aarch64")]
#[inline(always)]
fn read_cycles_aarch64() -> u64 {
    // Fixed-frequency timer, not actual CPU cycles
    let val: u64;
    unsafe {
        core::arch::asm!("mrs {}, cntvct_el0", out(reg) val);
    }
    val
}
