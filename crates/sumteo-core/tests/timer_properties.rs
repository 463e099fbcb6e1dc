//! Behavioural properties of the focus timer.
//!
//! Each test drives a `TimerHandle` by hand: ticks are delivered directly,
//! so no clock is involved.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use sumteo_core::{create_timer, TimerHandle, TimerStatus};

/// Handle with counting pause/complete callbacks.
fn counted(target_secs: u64) -> (TimerHandle, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let mut timer = create_timer(target_secs).unwrap();
    let completes = Arc::new(AtomicUsize::new(0));
    let pauses = Arc::new(AtomicUsize::new(0));
    let c = completes.clone();
    timer.on_complete(move || {
        c.fetch_add(1, Ordering::SeqCst);
    });
    let p = pauses.clone();
    timer.on_pause(move |_| {
        p.fetch_add(1, Ordering::SeqCst);
    });
    (timer, completes, pauses)
}

fn ticks(timer: &mut TimerHandle, n: u64) {
    for _ in 0..n {
        timer.tick();
    }
}

proptest! {
    #[test]
    fn exactly_target_ticks_complete_once(target in 1u64..600) {
        let (mut timer, completes, _) = counted(target);
        timer.start();
        ticks(&mut timer, target);

        let view = timer.view();
        prop_assert_eq!(view.status, TimerStatus::Complete);
        prop_assert_eq!(view.elapsed_secs, target);
        prop_assert_eq!(view.remaining_secs, 0);
        prop_assert_eq!(completes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn extra_ticks_after_completion_change_nothing(target in 1u64..300, extra in 1u64..50) {
        let (mut timer, completes, _) = counted(target);
        timer.start();
        ticks(&mut timer, target);
        let before = timer.view();

        ticks(&mut timer, extra);
        prop_assert_eq!(timer.view(), before);
        prop_assert_eq!(completes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reset_from_any_point_returns_to_ready(target in 1u64..120, delivered in 0u64..150, paused in any::<bool>()) {
        let (mut timer, completes, _) = counted(target);
        timer.start();
        ticks(&mut timer, delivered);
        if paused {
            timer.pause();
        }
        let completed_before = completes.load(Ordering::SeqCst);

        timer.reset();
        prop_assert_eq!(timer.status(), TimerStatus::Ready);
        prop_assert_eq!(timer.view().elapsed_secs, 0);

        ticks(&mut timer, 5);
        prop_assert_eq!(timer.view().elapsed_secs, 0);
        prop_assert_eq!(completes.load(Ordering::SeqCst), completed_before);
    }
}

#[test]
fn pause_resume_roundtrip_keeps_elapsed() {
    let (mut timer, _, _) = counted(10);
    timer.start();
    timer.pause();
    timer.resume();
    assert_eq!(timer.status(), TimerStatus::Running);
    assert_eq!(timer.view().elapsed_secs, 0);
}

#[test]
fn invalid_commands_are_no_ops() {
    let (mut timer, completes, pauses) = counted(2);

    let ready = timer.view();
    assert!(timer.pause().is_none());
    assert_eq!(timer.view(), ready);
    assert_eq!(pauses.load(Ordering::SeqCst), 0);

    timer.start();
    let running = timer.view();
    assert!(timer.resume().is_none());
    assert_eq!(timer.view(), running);

    ticks(&mut timer, 2);
    let complete = timer.view();
    assert!(timer.start().is_none());
    assert!(timer.pause().is_none());
    assert!(timer.resume().is_none());
    assert!(timer.notify_hidden().is_none());
    assert_eq!(timer.view(), complete);
    assert_eq!(completes.load(Ordering::SeqCst), 1);
}

#[test]
fn hidden_pauses_once() {
    let (mut timer, _, pauses) = counted(30);
    timer.start();
    timer.notify_hidden();
    assert_eq!(timer.status(), TimerStatus::Paused);
    assert_eq!(pauses.load(Ordering::SeqCst), 1);

    timer.notify_hidden();
    assert_eq!(pauses.load(Ordering::SeqCst), 1);
}

#[test]
fn hidden_is_ignored_outside_running() {
    let (mut timer, _, pauses) = counted(30);
    timer.notify_hidden();
    assert_eq!(timer.status(), TimerStatus::Ready);
    assert_eq!(pauses.load(Ordering::SeqCst), 0);
}

#[test]
fn five_second_session_scenario() {
    let (mut timer, completes, pauses) = counted(5);
    timer.start();
    ticks(&mut timer, 3);

    let view = timer.view();
    assert_eq!(view.display, "00:02");
    assert_eq!(view.progress_pct, 60.0);
    assert!(view.is_running());

    timer.pause();
    assert!(timer.view().is_paused());
    assert_eq!(pauses.load(Ordering::SeqCst), 1);

    timer.resume();
    ticks(&mut timer, 2);
    assert_eq!(timer.status(), TimerStatus::Complete);
    assert_eq!(timer.display(), "00:00");
    assert_eq!(timer.progress_pct(), 100.0);
    assert_eq!(completes.load(Ordering::SeqCst), 1);
}

#[test]
fn thirty_second_session_scenario() {
    let (mut timer, _, _) = counted(30);
    timer.start();
    ticks(&mut timer, 29);
    assert!(!timer.view().is_complete());

    timer.tick();
    let done = timer.view();
    assert!(done.is_complete());

    timer.tick();
    assert_eq!(timer.view(), done);
}

#[test]
fn zero_target_is_rejected_at_construction() {
    assert!(create_timer(0).is_err());
}
