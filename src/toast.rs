//! Toast presentation and auto-dismissal.
//!
//! Toasts are queued by `notify` and promoted to the screen on the next
//! `tick`, mirroring a deferred UI dispatch. A shown toast is cleared by a
//! single dismissal timer; replacing or closing the toast cancels that timer
//! first, so an old timer can never clear a newer toast.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::models::Toast;

/// Receiver for notifications raised by actions
pub trait Notifier {
    fn notify(&mut self, toast: Toast);
}

/// Identifies one scheduled dismissal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct PendingTimer {
    handle: TimerHandle,
    deadline: Instant,
}

/// Holds at most one pending dismissal deadline
#[derive(Debug, Default)]
pub struct DismissScheduler {
    next_id: u64,
    pending: Option<PendingTimer>,
}

impl DismissScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a dismissal `duration` after `now`.
    ///
    /// Callers cancel the previous timer first; a still-pending timer is
    /// replaced.
    pub fn schedule(&mut self, now: Instant, duration: Duration) -> TimerHandle {
        if let Some(old) = self.pending.take() {
            warn!(
                "event=timer_replaced module=toast handle={} reason=not_cancelled",
                old.handle.0
            );
        }
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending = Some(PendingTimer {
            handle,
            deadline: now + duration,
        });
        handle
    }

    /// Cancel `handle` if it is the pending timer. Returns whether it was.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match &self.pending {
            Some(timer) if timer.handle == handle => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Remove and return the pending timer if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<TimerHandle> {
        match &self.pending {
            Some(timer) if now >= timer.deadline => self.pending.take().map(|t| t.handle),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn pending(&self) -> Option<TimerHandle> {
        self.pending.as_ref().map(|t| t.handle)
    }
}

/// Shows one toast at a time and dismisses it on a timer
#[derive(Debug, Default)]
pub struct ToastPresenter {
    queued: Option<Toast>,
    current: Option<Toast>,
    timer: Option<TimerHandle>,
    scheduler: DismissScheduler,
}

impl ToastPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Promote a queued toast, then fire the dismissal timer if it is due
    pub fn tick(&mut self, now: Instant) {
        if let Some(toast) = self.queued.take() {
            self.show(toast, now);
        }

        if let Some(handle) = self.scheduler.take_due(now) {
            if self.timer == Some(handle) {
                self.timer = None;
                if self.current.take().is_some() {
                    debug!("event=toast_dismissed module=toast reason=timer");
                }
            }
        }
    }

    /// Close the current toast by hand
    pub fn dismiss(&mut self) {
        self.cancel_timer();
        if self.current.take().is_some() {
            debug!("event=toast_dismissed module=toast reason=user");
        }
    }

    fn show(&mut self, toast: Toast, now: Instant) {
        self.cancel_timer();
        if self.current.is_some() {
            debug!("event=toast_dismissed module=toast reason=replaced");
        }
        info!(
            "event=toast_shown module=toast style={} duration_ms={}",
            toast.style.label(),
            toast.duration.as_millis()
        );
        if !toast.duration.is_zero() {
            self.timer = Some(self.scheduler.schedule(now, toast.duration));
        }
        self.current = Some(toast);
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    #[cfg(test)]
    fn pending_timer(&self) -> Option<TimerHandle> {
        self.scheduler.pending()
    }
}

impl Notifier for ToastPresenter {
    fn notify(&mut self, toast: Toast) {
        self.queued = Some(toast);
    }
}
