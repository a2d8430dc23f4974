//! Animation scheduler
//!
//! Owns every registered animatable scalar and advances their timed
//! transitions each frame. Scalars are registered implicitly through
//! `AnimatedValue`, which holds its slot for as long as it lives.
//!
//! Completion callbacks never run while the scheduler is advancing. Finished
//! (or superseded) transitions queue their callback, and the queue is drained
//! on the caller's thread by `run_pending_callbacks()` (or `tick()`, which
//! does both). A callback therefore always fires on a later turn than the
//! request that scheduled it.

use crate::timing::{TimingAnimation, TimingConfig};
use slotmap::{new_key_type, SlotMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

new_key_type! {
    /// Handle to a registered animatable scalar
    pub struct TimingId;
}

/// Callback invoked when a transition ends
///
/// The argument is `true` when the transition ran to completion and `false`
/// when it was superseded by a newer target, an immediate set, or removal.
pub type CompletionCallback = Box<dyn FnOnce(bool) + Send + 'static>;

/// Callback type for waking up the main thread from the animation thread
pub type WakeCallback = Arc<dyn Fn() + Send + Sync>;

/// One animatable scalar and its in-flight transition, if any
struct Slot {
    /// Resting value (valid when no transition is in flight)
    value: f32,
    animation: Option<TimingAnimation>,
    on_complete: Option<CompletionCallback>,
}

impl Slot {
    fn current(&self) -> f32 {
        self.animation
            .as_ref()
            .map(|a| a.value())
            .unwrap_or(self.value)
    }

    /// Freeze at the current value and hand back the superseded callback
    fn interrupt(&mut self) -> Option<CompletionCallback> {
        self.value = self.current();
        self.animation = None;
        self.on_complete.take()
    }
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    slots: SlotMap<TimingId, Slot>,
    pending: Vec<(CompletionCallback, bool)>,
    last_frame: Instant,
}

impl SchedulerInner {
    /// Advance every in-flight transition; returns true if any remain active
    fn advance(&mut self, dt_ms: f32) -> bool {
        let mut active = false;
        for (id, slot) in self.slots.iter_mut() {
            let Some(animation) = slot.animation.as_mut() else {
                continue;
            };
            if animation.tick(dt_ms) {
                slot.value = animation.target();
                slot.animation = None;
                tracing::trace!(?id, value = slot.value, "transition finished");
                if let Some(callback) = slot.on_complete.take() {
                    self.pending.push((callback, true));
                }
            } else {
                active = true;
            }
        }
        active
    }

    fn has_active(&self) -> bool {
        self.slots.values().any(|s| s.animation.is_some())
    }
}

fn lock(inner: &Mutex<SchedulerInner>) -> MutexGuard<'_, SchedulerInner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The animation scheduler that ticks all registered scalars
///
/// Typically held by the host's event loop and shared with widgets via
/// `SchedulerHandle`.
///
/// # Background Thread Mode
///
/// `start_background()` advances time on its own thread so transitions keep
/// progressing while the UI thread is busy. The thread only advances values
/// and raises `needs_redraw`; completion callbacks stay queued until the UI
/// thread calls `run_pending_callbacks()`.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    /// Stop signal for background thread
    stop_flag: Arc<AtomicBool>,
    /// Set by the background thread while transitions are active
    needs_redraw: Arc<AtomicBool>,
    /// Background thread handle (if running)
    thread_handle: Option<JoinHandle<()>>,
    /// Optional callback to wake up the main thread
    wake_callback: Option<WakeCallback>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                slots: SlotMap::with_key(),
                pending: Vec::new(),
                last_frame: Instant::now(),
            })),
            stop_flag: Arc::new(AtomicBool::new(false)),
            needs_redraw: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
            wake_callback: None,
        }
    }

    /// Set a wake callback invoked from the background thread when a redraw is needed
    pub fn set_wake_callback<F>(&mut self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.wake_callback = Some(Arc::new(callback));
    }

    /// Start advancing time on a background thread at 120fps
    pub fn start_background(&mut self) {
        if self.thread_handle.is_some() {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let stop_flag = Arc::clone(&self.stop_flag);
        let needs_redraw = Arc::clone(&self.needs_redraw);
        let wake_callback = self.wake_callback.clone();

        tracing::debug!("AnimationScheduler: starting background thread");

        self.thread_handle = Some(thread::spawn(move || {
            let frame_duration = Duration::from_micros(1_000_000 / 120);

            while !stop_flag.load(Ordering::Relaxed) {
                let start = Instant::now();

                let wants_frame = {
                    let mut inner = lock(&inner);
                    let now = Instant::now();
                    let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
                    inner.last_frame = now;
                    let active = inner.advance(dt_ms);
                    active || !inner.pending.is_empty()
                };

                if wants_frame {
                    needs_redraw.store(true, Ordering::Release);
                    if let Some(ref callback) = wake_callback {
                        callback();
                    }
                }

                let elapsed = start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }
        }));
    }

    /// Stop the background thread
    pub fn stop_background(&mut self) {
        if let Some(handle) = self.thread_handle.take() {
            self.stop_flag.store(true, Ordering::Relaxed);
            let _ = handle.join();
            self.stop_flag.store(false, Ordering::Relaxed);
            tracing::debug!("AnimationScheduler: background thread stopped");
        }
    }

    pub fn is_background_running(&self) -> bool {
        self.thread_handle.is_some()
    }

    /// Check and clear the needs_redraw flag
    pub fn take_needs_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::Acquire)
    }

    /// Manually request a redraw
    pub fn request_redraw(&self) {
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Get a handle to this scheduler for passing to widgets
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all transitions by `dt_ms` without running callbacks
    ///
    /// Returns true if any transitions are still active.
    pub fn advance(&self, dt_ms: f32) -> bool {
        let mut inner = lock(&self.inner);
        inner.last_frame = Instant::now();
        inner.advance(dt_ms)
    }

    /// Run queued completion callbacks on the calling thread
    ///
    /// Returns the number of callbacks invoked.
    pub fn run_pending_callbacks(&self) -> usize {
        // Take the queue first so callbacks can reach back into the scheduler
        let pending = std::mem::take(&mut lock(&self.inner).pending);
        let count = pending.len();
        for (callback, finished) in pending {
            callback(finished);
        }
        if count > 0 {
            tracing::trace!(count, "ran completion callbacks");
        }
        count
    }

    /// Advance by an explicit frame delta, then run completion callbacks
    pub fn tick_by(&self, dt_ms: f32) -> bool {
        let active = self.advance(dt_ms);
        self.run_pending_callbacks();
        active
    }

    /// Advance by wall-clock time since the last frame, then run completion callbacks
    ///
    /// Returns true if any transitions are still active (need another tick).
    pub fn tick(&self) -> bool {
        let active = {
            let mut inner = lock(&self.inner);
            let now = Instant::now();
            let dt_ms = (now - inner.last_frame).as_secs_f32() * 1000.0;
            inner.last_frame = now;
            inner.advance(dt_ms)
        };
        self.run_pending_callbacks();
        active
    }

    /// Check if any transitions are in flight
    pub fn has_active_animations(&self) -> bool {
        lock(&self.inner).has_active()
    }

    /// Number of registered scalars
    pub fn value_count(&self) -> usize {
        lock(&self.inner).slots.len()
    }

    /// Number of completion callbacks waiting to run
    pub fn pending_callback_count(&self) -> usize {
        lock(&self.inner).pending.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for AnimationScheduler {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            stop_flag: Arc::clone(&self.stop_flag),
            needs_redraw: Arc::clone(&self.needs_redraw),
            // Cloned scheduler doesn't own the background thread
            thread_handle: None,
            wake_callback: self.wake_callback.clone(),
        }
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        self.stop_background();
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to widgets that need animatable scalars. It won't keep the
/// scheduler alive; every operation safely no-ops once it is dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register a scalar resting at `initial`
    pub fn register(&self, initial: f32) -> Option<TimingId> {
        self.inner.upgrade().map(|inner| {
            lock(&inner).slots.insert(Slot {
                value: initial,
                animation: None,
                on_complete: None,
            })
        })
    }

    /// Start a transition on a registered scalar, replacing any in flight
    ///
    /// The superseded transition's callback is queued with `finished == false`.
    /// Gives the callback back if the scheduler or the slot is gone.
    pub fn start(
        &self,
        id: TimingId,
        animation: TimingAnimation,
        on_complete: CompletionCallback,
    ) -> Result<(), CompletionCallback> {
        let Some(inner) = self.inner.upgrade() else {
            return Err(on_complete);
        };
        let mut guard = lock(&inner);
        // Reset the frame clock so the first wall-clock tick doesn't jump
        guard.last_frame = Instant::now();

        let SchedulerInner { slots, pending, .. } = &mut *guard;
        let Some(slot) = slots.get_mut(id) else {
            return Err(on_complete);
        };
        if let Some(superseded) = slot.interrupt() {
            tracing::trace!(?id, "transition superseded");
            pending.push((superseded, false));
        }
        slot.animation = Some(animation);
        slot.on_complete = Some(on_complete);
        Ok(())
    }

    /// Current value of a scalar
    pub fn value(&self, id: TimingId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).slots.get(id).map(|s| s.current()))
    }

    /// Check if a scalar has a transition in flight
    pub fn is_animating(&self, id: TimingId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| lock(&inner).slots.get(id).map(|s| s.animation.is_some()))
            .unwrap_or(false)
    }

    /// Whether the in-flight transition asked for the native driver
    pub fn uses_native_driver(&self, id: TimingId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                lock(&inner)
                    .slots
                    .get(id)
                    .and_then(|s| s.animation.as_ref().map(|a| a.uses_native_driver()))
            })
            .unwrap_or(false)
    }

    /// Jump a scalar to `value`, cancelling any transition in flight
    pub fn set_value(&self, id: TimingId, value: f32) {
        if let Some(inner) = self.inner.upgrade() {
            let mut guard = lock(&inner);
            let SchedulerInner { slots, pending, .. } = &mut *guard;
            if let Some(slot) = slots.get_mut(id) {
                if let Some(superseded) = slot.interrupt() {
                    pending.push((superseded, false));
                }
                slot.value = value;
            }
        }
    }

    /// Remove a scalar
    pub fn remove(&self, id: TimingId) {
        if let Some(inner) = self.inner.upgrade() {
            let mut guard = lock(&inner);
            if let Some(mut slot) = guard.slots.remove(id) {
                if let Some(superseded) = slot.interrupt() {
                    guard.pending.push((superseded, false));
                }
            }
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Value (timing-based)
// ============================================================================

/// An animatable scalar registered with the scheduler
///
/// `animate_to` starts a timed transition from the current value; calling it
/// again mid-flight retargets from wherever the value is now.
///
/// # Example
///
/// ```ignore
/// let mut opacity = AnimatedValue::new(scheduler.handle(), 0.0);
/// opacity.animate_to(1.0, TimingConfig::new(300), |finished| {
///     tracing::debug!(finished, "fade in done");
/// });
/// scheduler.tick();
/// let current = opacity.get();
/// ```
pub struct AnimatedValue {
    handle: SchedulerHandle,
    id: Option<TimingId>,
    /// Fallback value used when the scheduler is gone
    current: f32,
    target: f32,
}

impl AnimatedValue {
    /// Create a new animated value resting at `initial`
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        let id = handle.register(initial);
        if id.is_none() {
            tracing::debug!("AnimatedValue: scheduler unavailable, values will snap");
        }
        Self {
            handle,
            id,
            current: initial,
            target: initial,
        }
    }

    /// Get the current value
    pub fn get(&self) -> f32 {
        self.id
            .and_then(|id| self.handle.value(id))
            .unwrap_or(self.current)
    }

    /// The value the latest transition is heading toward
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Check if a transition is in flight
    pub fn is_animating(&self) -> bool {
        self.id
            .map(|id| self.handle.is_animating(id))
            .unwrap_or(false)
    }

    /// Whether the in-flight transition runs on the native driver
    pub fn uses_native_driver(&self) -> bool {
        self.id
            .map(|id| self.handle.uses_native_driver(id))
            .unwrap_or(false)
    }

    /// Transition from the current value to `target`
    ///
    /// `on_complete` runs on a later scheduler turn. Without a live scheduler
    /// the value snaps to `target` and `on_complete(true)` runs immediately.
    pub fn animate_to<F>(&mut self, target: f32, config: TimingConfig, on_complete: F)
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let from = self.get();
        self.target = target;

        tracing::debug!(
            from,
            target,
            duration_ms = config.duration_ms,
            native_driver = config.use_native_driver,
            "AnimatedValue::animate_to"
        );

        let mut callback: CompletionCallback = Box::new(on_complete);
        if let Some(id) = self.id {
            let animation = TimingAnimation::new(from, target, config);
            match self.handle.start(id, animation, callback) {
                Ok(()) => {
                    self.current = from;
                    return;
                }
                Err(returned) => callback = returned,
            }
        }

        self.current = target;
        callback(true);
    }

    /// Jump to `value` without animating
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        if let Some(id) = self.id {
            self.handle.set_value(id, value);
        }
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.id {
            self.handle.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::Easing;
    use std::sync::atomic::AtomicUsize;

    fn linear(duration_ms: u32) -> TimingConfig {
        TimingConfig::new(duration_ms).easing(Easing::Linear)
    }

    #[test]
    fn test_scheduler_tick_by() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0);

        value.animate_to(100.0, linear(1000), |_| {});
        assert!(scheduler.has_active_animations());

        assert!(scheduler.tick_by(250.0));
        assert!((value.get() - 25.0).abs() < 1e-3);

        assert!(!scheduler.tick_by(750.0));
        assert_eq!(value.get(), 100.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_completion_runs_after_duration() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0);
        let done = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&done);
        value.animate_to(1.0, linear(300), move |finished| {
            flag.store(finished, Ordering::SeqCst);
        });

        // Not synchronous
        assert!(!done.load(Ordering::SeqCst));

        scheduler.tick_by(299.0);
        assert!(!done.load(Ordering::SeqCst));

        scheduler.tick_by(1.0);
        assert!(done.load(Ordering::SeqCst));
    }

    #[test]
    fn test_advance_queues_callbacks_until_drained() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0);
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        value.animate_to(1.0, linear(10), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        scheduler.advance(20.0);
        assert_eq!(scheduler.pending_callback_count(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(scheduler.run_pending_callbacks(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0);
        let first = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&first);
        value.animate_to(1.0, linear(100), move |finished| {
            *slot.lock().unwrap() = Some(finished);
        });
        scheduler.tick_by(40.0);
        let mid = value.get();
        assert!((mid - 0.4).abs() < 1e-4);

        value.animate_to(0.0, linear(100), |_| {});
        assert!((value.get() - mid).abs() < 1e-6);
        assert_eq!(value.target(), 0.0);

        // Superseded callback reports an unfinished transition
        scheduler.run_pending_callbacks();
        assert_eq!(*first.lock().unwrap(), Some(false));

        scheduler.tick_by(50.0);
        assert!((value.get() - 0.2).abs() < 1e-4);
    }

    #[test]
    fn test_set_immediate_cancels_transition() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0);
        let result = Arc::new(Mutex::new(None));

        let slot = Arc::clone(&result);
        value.animate_to(1.0, linear(100), move |finished| {
            *slot.lock().unwrap() = Some(finished);
        });
        value.set_immediate(0.5);

        assert_eq!(value.get(), 0.5);
        assert!(!value.is_animating());
        scheduler.run_pending_callbacks();
        assert_eq!(*result.lock().unwrap(), Some(false));
    }

    #[test]
    fn test_native_driver_flag_is_forwarded() {
        let scheduler = AnimationScheduler::new();
        let mut value = AnimatedValue::new(scheduler.handle(), 0.0);

        value.animate_to(1.0, linear(100).native_driver(true), |_| {});
        assert!(value.uses_native_driver());

        scheduler.tick_by(100.0);
        assert!(!value.uses_native_driver());
    }

    #[test]
    fn test_handle_weak_reference() {
        let handle = {
            let scheduler = AnimationScheduler::new();
            scheduler.handle()
        };

        // Scheduler is dropped, handle should not be alive
        assert!(!handle.is_alive());
        assert!(handle.register(0.0).is_none());
    }

    #[test]
    fn test_value_snaps_without_scheduler() {
        let handle = AnimationScheduler::new().handle();
        let mut value = AnimatedValue::new(handle, 0.0);
        let done = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&done);
        value.animate_to(1.0, linear(300), move |finished| {
            flag.store(finished, Ordering::SeqCst);
        });

        assert_eq!(value.get(), 1.0);
        assert!(done.load(Ordering::SeqCst));
    }

    #[test]
    fn test_drop_removes_slot() {
        let scheduler = AnimationScheduler::new();
        {
            let _a = AnimatedValue::new(scheduler.handle(), 0.0);
            let _b = AnimatedValue::new(scheduler.handle(), 1.0);
            assert_eq!(scheduler.value_count(), 2);
        }
        assert_eq!(scheduler.value_count(), 0);
    }

    #[test]
    fn test_background_thread_requests_redraw() {
        let mut scheduler = AnimationScheduler::new();
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakes);
        scheduler.set_wake_callback(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut value = AnimatedValue::new(scheduler.handle(), 0.0);
        value.animate_to(1.0, linear(5_000), |_| {});

        scheduler.start_background();
        assert!(scheduler.is_background_running());
        thread::sleep(Duration::from_millis(100));
        scheduler.stop_background();

        assert!(scheduler.take_needs_redraw());
        assert!(wakes.load(Ordering::SeqCst) > 0);
        assert!(value.get() > 0.0);
    }
}
