//! Tick instrumentation
//!
//! The host calls [`TickInstrumentation::on_tick`] once per completed game
//! loop iteration, on its main thread. Everything on that path is an atomic
//! or an uncontended lock: no allocation, no logging, no I/O.
//!
//! - [`SculkTickHook`] counts iterations for the engine's tick-based
//!   scheduling
//! - [`SculkTickReporter`] turns consecutive iterations into durations for
//!   the engine's tick statistics; it measures between host calls and never
//!   schedules anything itself
//!
//! Callbacks run against a snapshot of the registry, so a callback may add,
//! remove or close without blocking the loop. Changes apply from the next
//! iteration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use spark_shared::{TickCallback, TickHook, TickReporter, TickReporterCallback};


// ============================================================================
// Callback registry
// ============================================================================

/// Copy-on-write callback list. Readers clone the `Arc` and iterate without
/// holding the lock; writers replace the whole slice.
struct Callbacks<C: ?Sized> {
    entries: RwLock<Arc<[Arc<C>]>>,
}

impl<C: ?Sized> Default for Callbacks<C> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(Arc::from(Vec::new())),
        }
    }
}

impl<C: ?Sized> Callbacks<C> {
    fn snapshot(&self) -> Arc<[Arc<C>]> {
        self.entries.read().clone()
    }

    fn push(&self, callback: Arc<C>) {
        let mut entries = self.entries.write();
        let mut next = entries.to_vec();
        next.push(callback);
        *entries = Arc::from(next);
    }

    fn remove(&self, callback: &Arc<C>) -> bool {
        let mut entries = self.entries.write();
        let Some(index) = entries.iter().position(|c| Arc::ptr_eq(c, callback)) else {
            return false;
        };
        let mut next = entries.to_vec();
        next.remove(index);
        *entries = Arc::from(next);
        true
    }

    fn clear(&self) {
        *self.entries.write() = Arc::from(Vec::new());
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

// ============================================================================
// Hook
// ============================================================================

#[derive(Default)]
struct HookState {
    running: AtomicBool,
    tick: AtomicU64,
    callbacks: Callbacks<dyn Fn(u64) + Send + Sync>,
}

/// Counts host loop iterations. Clones share the same counter.
#[derive(Clone, Default)]
pub struct SculkTickHook {
    state: Arc<HookState>,
}

impl SculkTickHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed iteration. Ignored unless started.
    pub fn on_tick(&self) {
        if !self.state.running.load(Ordering::Acquire) {
            return;
        }
        let tick = self.state.tick.fetch_add(1, Ordering::Relaxed) + 1;
        for callback in self.state.callbacks.snapshot().iter() {
            callback(tick);
        }
    }

    pub fn is_running(&self) -> bool {
        self.state.running.load(Ordering::Acquire)
    }

    pub fn callback_count(&self) -> usize {
        self.state.callbacks.len()
    }
}

impl TickHook for SculkTickHook {
    fn start(&self) {
        self.state.running.store(true, Ordering::Release);
    }

    fn close(&self) {
        self.state.running.store(false, Ordering::Release);
        self.state.callbacks.clear();
    }

    fn current_tick(&self) -> u64 {
        self.state.tick.load(Ordering::Relaxed)
    }

    fn add_callback(&self, callback: TickCallback) {
        self.state.callbacks.push(callback);
    }

    fn remove_callback(&self, callback: &TickCallback) -> bool {
        self.state.callbacks.remove(callback)
    }
}

// ============================================================================
// Reporter
// ============================================================================

#[derive(Default)]
struct ReporterState {
    running: AtomicBool,
    last_tick: Mutex<Option<Instant>>,
    callbacks: Callbacks<dyn Fn(Duration) + Send + Sync>,
}

/// Publishes the time between consecutive iterations. Clones share state.
#[derive(Clone, Default)]
pub struct SculkTickReporter {
    state: Arc<ReporterState>,
}

impl SculkTickReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed iteration observed at `Instant::now()`.
    pub fn on_tick(&self) {
        self.on_tick_at(Instant::now());
    }

    /// Record one completed iteration observed at `now`.
    ///
    /// The first iteration after `start` only sets the baseline.
    pub fn on_tick_at(&self, now: Instant) {
        if !self.state.running.load(Ordering::Acquire) {
            return;
        }
        let previous = self.state.last_tick.lock().replace(now);
        let Some(previous) = previous else {
            return;
        };
        let duration = now.saturating_duration_since(previous);
        for callback in self.state.callbacks.snapshot().iter() {
            callback(duration);
        }
    }

    pub fn callback_count(&self) -> usize {
        self.state.callbacks.len()
    }

    /// Time since the last recorded iteration, if any.
    pub fn since_last_tick(&self) -> Option<Duration> {
        let last = *self.state.last_tick.lock();
        last.map(|last| last.elapsed())
    }
}

impl TickReporter for SculkTickReporter {
    fn start(&self) {
        *self.state.last_tick.lock() = None;
        self.state.running.store(true, Ordering::Release);
    }

    fn close(&self) {
        self.state.running.store(false, Ordering::Release);
        self.state.callbacks.clear();
    }

    fn add_callback(&self, callback: TickReporterCallback) {
        self.state.callbacks.push(callback);
    }

    fn remove_callback(&self, callback: &TickReporterCallback) -> bool {
        self.state.callbacks.remove(callback)
    }
}

// ============================================================================
// Host entry point
// ============================================================================

/// The hook and reporter pair driven by the host loop.
#[derive(Clone, Default)]
pub struct TickInstrumentation {
    pub hook: SculkTickHook,
    pub reporter: SculkTickReporter,
}

impl TickInstrumentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per completed game loop iteration.
    pub fn on_tick(&self) {
        let now = Instant::now();
        self.hook.on_tick();
        self.reporter.on_tick_at(now);
    }
}
