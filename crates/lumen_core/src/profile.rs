//! Profiling counters and timers.
//!
//! Counters are advisory observability state, not correctness-critical:
//! workers bump them with relaxed atomics during the parallel phase and
//! totals are only read after the render joins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use lumen_math::Scalar;

/// Monotonically increasing render counters.
#[derive(Debug, Default)]
pub struct Counters {
    objects: AtomicU64,
    lights: AtomicU64,
    traces: AtomicU64,
    rays: AtomicU64,
}

impl Counters {
    /// Create a fresh set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `n` scene objects.
    pub fn inc_objects(&self, n: u64) {
        self.objects.fetch_add(n, Ordering::Relaxed);
    }

    /// Register `n` light samples.
    pub fn inc_lights(&self, n: u64) {
        self.lights.fetch_add(n, Ordering::Relaxed);
    }

    /// Count `n` calls to the tracer.
    pub fn inc_traces(&self, n: u64) {
        self.traces.fetch_add(n, Ordering::Relaxed);
    }

    /// Count `n` shading rays that reached a light.
    pub fn inc_rays(&self, n: u64) {
        self.rays.fetch_add(n, Ordering::Relaxed);
    }

    /// Objects registered.
    pub fn objects(&self) -> u64 {
        self.objects.load(Ordering::Relaxed)
    }

    /// Light samples registered.
    pub fn lights(&self) -> u64 {
        self.lights.load(Ordering::Relaxed)
    }

    /// Traces performed.
    pub fn traces(&self) -> u64 {
        self.traces.load(Ordering::Relaxed)
    }

    /// Shading rays cast.
    pub fn rays(&self) -> u64 {
        self.rays.load(Ordering::Relaxed)
    }
}

/// A timer that starts on creation.
#[derive(Debug)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Create and start a timer.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Seconds elapsed since the timer started.
    pub fn elapsed(&self) -> Scalar {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
