//! One-shot Timers
//!
//! Deferred callbacks owned by the view that scheduled them. Dropping or
//! cancelling the owner cancels the pending callback, so nothing fires
//! against a torn-down page.

use futures::channel::oneshot;
use gloo_timers::callback::Timeout;

/// Source of one-shot deferred callbacks.
///
/// Dropping the returned handle must cancel the callback if it has not run.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout`-backed scheduler
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Holds at most one pending callback.
///
/// Arming replaces (and cancels) the previous callback.
pub struct TimerSlot<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> TimerSlot<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None }
    }

    pub fn arm(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.pending = None;
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(callback)));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Resolve after `delay_ms` on `scheduler`.
///
/// Dropping the future before then cancels the underlying callback.
pub async fn sleep<S: Scheduler>(scheduler: &S, delay_ms: u32) {
    let (tx, rx) = oneshot::channel();
    let _pending = scheduler.schedule(
        delay_ms,
        Box::new(move || {
            let _ = tx.send(());
        }),
    );
    let _ = rx.await;
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use futures::executor::LocalPool;
    use futures::future::abortable;
    use futures::task::LocalSpawnExt;

    use super::manual::ManualScheduler;
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let scheduler = ManualScheduler::default();
        let mut slot = TimerSlot::new(scheduler.clone());
        let fired = Rc::new(Cell::new(0));

        let f = fired.clone();
        slot.arm(100, move || f.set(f.get() + 1));

        scheduler.advance(99);
        assert_eq!(fired.get(), 0);
        scheduler.advance(1);
        assert_eq!(fired.get(), 1);
        scheduler.advance(1000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let scheduler = ManualScheduler::default();
        let mut slot = TimerSlot::new(scheduler.clone());
        let fired = Rc::new(Cell::new(0));

        let f = fired.clone();
        slot.arm(100, move || f.set(f.get() + 1));
        scheduler.advance(50);
        let f = fired.clone();
        slot.arm(100, move || f.set(f.get() + 10));

        scheduler.advance(60);
        assert_eq!(fired.get(), 0);
        scheduler.advance(40);
        assert_eq!(fired.get(), 10);
    }

    #[test]
    fn test_dropping_slot_cancels() {
        let scheduler = ManualScheduler::default();
        let fired = Rc::new(Cell::new(false));
        {
            let mut slot = TimerSlot::new(scheduler.clone());
            let f = fired.clone();
            slot.arm(10, move || f.set(true));
        }
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(100);
        assert!(!fired.get());
    }

    #[test]
    fn test_sleep_resolves_on_time() {
        let scheduler = ManualScheduler::default();
        let mut pool = LocalPool::new();
        let done = Rc::new(Cell::new(false));

        let (s, d) = (scheduler.clone(), done.clone());
        pool.spawner()
            .spawn_local(async move {
                sleep(&s, 500).await;
                d.set(true);
            })
            .unwrap();

        pool.run_until_stalled();
        scheduler.advance(499);
        pool.run_until_stalled();
        assert!(!done.get());
        scheduler.advance(1);
        pool.run_until_stalled();
        assert!(done.get());
    }

    #[test]
    fn test_dropped_sleep_cancels_callback() {
        let scheduler = ManualScheduler::default();
        let mut pool = LocalPool::new();

        let s = scheduler.clone();
        let (task, handle) = abortable(async move { sleep(&s, 500).await });
        pool.spawner()
            .spawn_local(async move {
                let _ = task.await;
            })
            .unwrap();

        pool.run_until_stalled();
        assert_eq!(scheduler.pending(), 1);
        handle.abort();
        pool.run_until_stalled();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel() {
        let scheduler = ManualScheduler::default();
        let mut slot = TimerSlot::new(scheduler.clone());
        let fired = Rc::new(Cell::new(false));
        let f = fired.clone();
        slot.arm(10, move || f.set(true));
        slot.cancel();
        scheduler.advance(100);
        assert!(!fired.get());
    }
}
