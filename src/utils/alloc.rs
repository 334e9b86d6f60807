//! Per-thread allocation tracking.
//!
//! [`TrackingAllocator`] forwards to the system allocator and, while a
//! [`MemoryScope`] is active on the calling thread, keeps a running count of
//! live bytes allocated by that thread and its high-water mark. Algorithms run
//! synchronously on a single thread, so the figures are attributable to one
//! call even when other requests execute concurrently on other threads.
//!
//! The allocator is installed as the global allocator when the
//! `alloc_tracking` feature is enabled (the default).

use serde::Serialize;
use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::marker::PhantomData;

struct ScopeState {
    active: Cell<bool>,
    current: Cell<i64>,
    peak: Cell<i64>,
}

thread_local! {
    // const-initialized and without Drop: accessing it never allocates
    static STATE: ScopeState = const {
        ScopeState {
            active: Cell::new(false),
            current: Cell::new(0),
            peak: Cell::new(0),
        }
    };
}

#[inline]
fn note(delta: i64) {
    let _ = STATE.try_with(|s| {
        if s.active.get() {
            let current = s.current.get() + delta;
            s.current.set(current);
            if current > s.peak.get() {
                s.peak.set(current);
            }
        }
    });
}

/// Counting wrapper around [`System`].
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            note(layout.size() as i64);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            note(layout.size() as i64);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
        note(-(layout.size() as i64));
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            note(new_size as i64 - layout.size() as i64);
        }
        new_ptr
    }
}

#[cfg(feature = "alloc_tracking")]
#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

/// Where the memory figures come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemorySource {
    /// Counted by the tracking global allocator
    Allocator,
    /// No tracer installed; figures are zero
    Unavailable,
}

impl MemorySource {
    pub const fn current() -> Self {
        if cfg!(feature = "alloc_tracking") {
            MemorySource::Allocator
        } else {
            MemorySource::Unavailable
        }
    }
}

/// Allocation figures observed inside a [`MemoryScope`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemoryUsage {
    /// Net bytes allocated and still live (negative if the scope freed more
    /// than it allocated)
    pub used_bytes: i64,
    /// High-water mark of live bytes since the scope started
    pub peak_bytes: i64,
    pub source: MemorySource,
}

impl MemoryUsage {
    pub fn used_kb(&self) -> f64 {
        self.used_bytes as f64 / 1024.0
    }

    pub fn peak_kb(&self) -> f64 {
        self.peak_bytes as f64 / 1024.0
    }
}

/// RAII guard for allocation tracking - starts on creation, stops on drop.
///
/// Tracking is torn down on every exit path, including early returns through
/// `?` and panics. Scopes do not nest: starting a second scope on the same
/// thread restarts the counters.
///
/// # Example
/// ```ignore
/// {
///     let scope = MemoryScope::start();
///     let v = vec![0u8; 4096];
///     let usage = scope.usage(); // used_bytes >= 4096
/// } // tracking stopped here
/// ```
pub struct MemoryScope {
    // Tied to the thread that owns the counters
    _not_send: PhantomData<*const ()>,
}

impl MemoryScope {
    pub fn start() -> Self {
        STATE.with(|s| {
            s.current.set(0);
            s.peak.set(0);
            s.active.set(true);
        });
        Self {
            _not_send: PhantomData,
        }
    }

    /// Figures observed so far.
    pub fn usage(&self) -> MemoryUsage {
        let (used_bytes, peak_bytes) = STATE.with(|s| (s.current.get(), s.peak.get()));
        MemoryUsage {
            used_bytes,
            peak_bytes,
            source: MemorySource::current(),
        }
    }

    /// Whether a scope is currently active on this thread.
    pub fn is_active() -> bool {
        STATE.with(|s| s.active.get())
    }
}

impl Drop for MemoryScope {
    fn drop(&mut self) {
        STATE.with(|s| s.active.set(false));
    }
}
