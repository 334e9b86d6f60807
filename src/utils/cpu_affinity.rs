//! Optional CPU pinning of the executing thread.
//!
//! When `engine.pin_cpu` is enabled, the instrumentation wrapper pins the
//! blocking worker thread to the core it is currently running on for the
//! duration of one execution, so the scheduler cannot migrate it mid-run.
//! Pinning is supported on Linux through libc; elsewhere the guard is a no-op.

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    pub type Mask = libc::cpu_set_t;

    /// Get the current CPU core the thread is running on
    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        (cpu >= 0).then_some(cpu as usize)
    }

    /// Read the current affinity mask of the calling thread
    pub fn get_affinity() -> Option<Mask> {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            (libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(set)
        }
    }

    /// Restrict the calling thread to a single core
    pub fn pin(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    /// Restore a previously saved mask
    pub fn restore(mask: &Mask) -> bool {
        unsafe { libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), mask) == 0 }
    }
}

// ============================================================================
// Fallback for other platforms
// ============================================================================

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Mask = ();

    pub fn current_cpu() -> Option<usize> {
        None
    }
    pub fn get_affinity() -> Option<Mask> {
        None
    }
    pub fn pin(_core_id: usize) -> bool {
        false
    }
    pub fn restore(_mask: &Mask) -> bool {
        true
    }
}

// ============================================================================
// RAII Guard
// ============================================================================

/// RAII guard for CPU pinning - pins on creation, restores on drop.
///
/// The original affinity mask is kept in the guard itself and restored even
/// if the measured code returns early or panics.
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Mask>,
}

impl CpuPinGuard {
    /// Pin the calling thread to the core it is currently running on.
    pub fn new() -> Self {
        let saved = platform::get_affinity();
        let pinned_core = match (saved.as_ref(), platform::current_cpu()) {
            (Some(_), Some(core)) if platform::pin(core) => Some(core),
            _ => None,
        };
        Self { pinned_core, saved }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    /// Check if the thread was successfully pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            if let Some(mask) = self.saved.take() {
                if !platform::restore(&mask) {
                    tracing::warn!("failed to restore CPU affinity after pinned execution");
                }
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}
