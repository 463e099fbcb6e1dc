//! Host-facing timer handle: the engine plus its registered callbacks.
//!
//! The host owns the handle and passes it to whatever needs it. Pause and
//! completion callbacks run synchronously inside the command that caused
//! them, after the state change is visible.

use std::fmt;

use tracing::info;

use super::config::TimerConfig;
use super::engine::{TimerEngine, TimerStatus};
use super::view::TimerView;
use crate::error::ValidationError;
use crate::events::{Event, PauseReason};

type CompleteCallback = Box<dyn FnMut() + Send>;
type PauseCallback = Box<dyn FnMut(PauseReason) + Send>;

/// Build a handle for a fresh session. Fails fast on a zero target.
pub fn create_timer(target_secs: u64) -> Result<TimerHandle, ValidationError> {
    Ok(TimerHandle::new(TimerConfig::new(target_secs)?))
}

pub struct TimerHandle {
    engine: TimerEngine,
    on_complete: Option<CompleteCallback>,
    on_pause: Option<PauseCallback>,
}

impl TimerHandle {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            engine: TimerEngine::new(config),
            on_complete: None,
            on_pause: None,
        }
    }

    /// Replaces any previously registered completion callback.
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    /// Replaces any previously registered pause callback.
    pub fn on_pause<F>(&mut self, callback: F)
    where
        F: FnMut(PauseReason) + Send + 'static,
    {
        self.on_pause = Some(Box::new(callback));
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    pub fn status(&self) -> TimerStatus {
        self.engine.status()
    }

    pub fn display(&self) -> String {
        self.engine.view().display
    }

    pub fn progress_pct(&self) -> f64 {
        self.engine.view().progress_pct
    }

    pub fn view(&self) -> TimerView {
        self.engine.view()
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.engine.start()
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.engine.pause();
        self.dispatch(event)
    }

    pub fn resume(&mut self) -> Option<Event> {
        self.engine.resume()
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.engine.reset()
    }

    pub fn notify_hidden(&mut self) -> Option<Event> {
        let event = self.engine.notify_hidden();
        self.dispatch(event)
    }

    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick();
        self.dispatch(event)
    }

    fn dispatch(&mut self, event: Option<Event>) -> Option<Event> {
        match &event {
            Some(Event::TimerPaused { reason, .. }) => {
                if let Some(callback) = self.on_pause.as_mut() {
                    callback(*reason);
                }
            }
            Some(Event::TimerCompleted { target_secs, .. }) => {
                info!(target_secs, "focus session complete");
                if let Some(callback) = self.on_complete.as_mut() {
                    callback();
                }
            }
            _ => {}
        }
        event
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("engine", &self.engine)
            .field("on_complete", &self.on_complete.is_some())
            .field("on_pause", &self.on_pause.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let c = Arc::new(AtomicUsize::new(0));
        (c.clone(), c)
    }

    #[test]
    fn zero_target_rejected() {
        assert!(create_timer(0).is_err());
    }

    #[test]
    fn completion_fires_once() {
        let (count, seen) = counter();
        let mut timer = create_timer(2).unwrap();
        timer.on_complete(move || {
            count.fetch_add(1, Ordering::SeqCst);
        });
        timer.start();
        for _ in 0..5 {
            timer.tick();
        }
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reregistering_replaces_callback() {
        let (first, first_seen) = counter();
        let (second, second_seen) = counter();
        let mut timer = create_timer(10).unwrap();
        timer.on_pause(move |_| {
            first.fetch_add(1, Ordering::SeqCst);
        });
        timer.on_pause(move |_| {
            second.fetch_add(1, Ordering::SeqCst);
        });
        timer.start();
        timer.pause();
        assert_eq!(first_seen.load(Ordering::SeqCst), 0);
        assert_eq!(second_seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reset_does_not_fire_completion() {
        let (count, seen) = counter();
        let mut timer = create_timer(1).unwrap();
        timer.on_complete(move || {
            count.fetch_add(1, Ordering::SeqCst);
        });
        timer.start();
        timer.reset();
        timer.tick();
        assert_eq!(seen.load(Ordering::SeqCst), 0);
        assert_eq!(timer.status(), TimerStatus::Ready);
    }

    #[test]
    fn pause_callback_sees_reason() {
        let reasons = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = reasons.clone();
        let mut timer = create_timer(10).unwrap();
        timer.on_pause(move |reason| sink.lock().unwrap().push(reason));
        timer.start();
        timer.pause();
        timer.resume();
        timer.notify_hidden();
        assert_eq!(
            *reasons.lock().unwrap(),
            vec![PauseReason::User, PauseReason::Hidden]
        );
    }
}
