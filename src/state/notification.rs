// ============================================================================
// NOTIFICATION - Single-slot, auto-dismissing outcome message
// ============================================================================
// One message at a time for the whole app. A new message replaces the old one
// and restarts the dismiss timer; the old timer is dropped (cancelled) and
// guarded by a generation number, so it can never hide the newer message.
// ============================================================================

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use super::reactivity::ReactiveState;

/// Live timer. Dropping it cancels the callback.
pub struct TimerHandle {
    _guard: Box<dyn Any>,
}

impl TimerHandle {
    pub fn new<G: Any>(guard: G) -> Self {
        Self { _guard: Box::new(guard) }
    }
}

pub trait TimerScheduler {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle;
}

/// Browser timers (`setTimeout` through gloo-timers)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooTimers;

#[cfg(target_arch = "wasm32")]
impl TimerScheduler for GlooTimers {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        TimerHandle::new(gloo_timers::callback::Timeout::new(delay_ms, callback))
    }
}

// ============================================================================
// MANUAL CLOCK - Headless runs and tests advance time by hand
// ============================================================================

type Pending = (u64, u64, Box<dyn FnOnce()>);

#[derive(Default)]
struct ManualClock {
    now: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

#[derive(Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<ManualClock>>,
}

struct ManualGuard {
    id: u64,
    clock: Weak<RefCell<ManualClock>>,
}

impl Drop for ManualGuard {
    fn drop(&mut self) {
        if let Some(clock) = self.clock.upgrade() {
            if let Ok(mut clock) = clock.try_borrow_mut() {
                clock.pending.retain(|(id, _, _)| *id != self.id);
            }
        }
    }
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers scheduled and not yet fired or cancelled
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    /// Move the clock forward, firing every timer that comes due
    pub fn advance(&self, ms: u64) {
        let due: Vec<Box<dyn FnOnce()>> = {
            let mut clock = self.clock.borrow_mut();
            clock.now += ms;
            let now = clock.now;
            let mut fired = Vec::new();
            let mut waiting = Vec::new();
            for entry in clock.pending.drain(..) {
                if entry.1 <= now {
                    fired.push(entry);
                } else {
                    waiting.push(entry);
                }
            }
            clock.pending = waiting;
            fired.sort_by_key(|(_, at, _)| *at);
            fired.into_iter().map(|(_, _, callback)| callback).collect()
        };
        for callback in due {
            callback();
        }
    }
}

impl TimerScheduler for ManualTimers {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TimerHandle {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let at = clock.now + u64::from(delay_ms);
        clock.pending.push((id, at, callback));
        TimerHandle::new(ManualGuard {
            id,
            clock: Rc::downgrade(&self.clock),
        })
    }
}

// ============================================================================
// NOTIFICATION SLOT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationView {
    pub message: String,
    pub visible: bool,
}

pub struct Notification {
    state: ReactiveState<Option<NotificationView>>,
    generation: Rc<Cell<u64>>,
    timer: RefCell<Option<TimerHandle>>,
    scheduler: Rc<dyn TimerScheduler>,
    timeout_ms: u32,
}

impl Notification {
    pub fn new(scheduler: Rc<dyn TimerScheduler>, timeout_ms: u32) -> Self {
        Self {
            state: ReactiveState::new(None),
            generation: Rc::new(Cell::new(0)),
            timer: RefCell::new(None),
            scheduler,
            timeout_ms,
        }
    }

    pub fn current(&self) -> Option<NotificationView> {
        self.state.get()
    }

    pub fn is_visible(&self) -> bool {
        self.state.with(|n| n.as_ref().map_or(false, |n| n.visible))
    }

    pub fn show(&self, message: impl Into<String>) {
        let message = message.into();
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        // Cancel the previous timer before arming the next one
        self.timer.borrow_mut().take();

        log::info!("🔔 [NOTIFY] {}", message);
        self.state.set(Some(NotificationView { message, visible: true }));

        let state = self.state.clone();
        let current = self.generation.clone();
        let handle = self.scheduler.schedule(
            self.timeout_ms,
            Box::new(move || {
                if current.get() == generation {
                    state.update(|slot| {
                        if let Some(view) = slot {
                            view.visible = false;
                        }
                    });
                }
            }),
        );
        *self.timer.borrow_mut() = Some(handle);
    }

    pub fn dismiss(&self) {
        self.generation.set(self.generation.get() + 1);
        self.timer.borrow_mut().take();
        if self.is_visible() {
            self.state.update(|slot| {
                if let Some(view) = slot {
                    view.visible = false;
                }
            });
        }
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> usize {
        self.state.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot() -> (Rc<ManualTimers>, Notification) {
        let timers = Rc::new(ManualTimers::new());
        let notification = Notification::new(timers.clone(), 4000);
        (timers, notification)
    }

    #[test]
    fn hides_after_timeout() {
        let (timers, notification) = slot();
        notification.show("Saved");

        timers.advance(3999);
        assert!(notification.is_visible());

        timers.advance(1);
        assert!(!notification.is_visible());
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn newer_message_supersedes_older_timer() {
        let (timers, notification) = slot();
        notification.show("A");
        timers.advance(3000);
        notification.show("B");

        assert_eq!(timers.pending(), 1);
        assert_eq!(notification.current().unwrap().message, "B");

        // A's deadline passes; B stays up
        timers.advance(1500);
        assert!(notification.is_visible());
        assert_eq!(notification.current().unwrap().message, "B");

        timers.advance(2500);
        assert!(!notification.is_visible());
    }

    #[test]
    fn dismiss_cancels_timer() {
        let (timers, notification) = slot();
        notification.show("Deleted");
        notification.dismiss();

        assert!(!notification.is_visible());
        assert_eq!(timers.pending(), 0);
    }
}
