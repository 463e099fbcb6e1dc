//! Async tick source for a focus session.
//!
//! One tokio task owns the [`TimerHandle`]. Commands, visibility reports
//! and ticks are all handled in the same `select!` loop, so the state has
//! a single writer and needs no lock. The tick interval exists only while
//! the timer is running: it is created on entry to `Running` (first tick one
//! period later) and dropped as soon as the timer leaves it. Commands win
//! ties against a due tick, which keeps a stale tick from landing after a
//! reset.

use std::time::Duration;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, trace};

use super::handle::TimerHandle;
use super::view::TimerView;

const COMMAND_BUFFER: usize = 32;
const MIN_TICK_PERIOD: Duration = Duration::from_millis(1);

/// A `tick_period` below one millisecond is raised to one millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOptions {
    pub tick_period: Duration,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_secs(1),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DriverError {
    #[error("timer driver has stopped")]
    Closed,
}

#[derive(Debug)]
enum Command {
    Start,
    Pause,
    Resume,
    Reset,
    Hidden,
    View(oneshot::Sender<TimerView>),
    Shutdown,
}

/// Cloneable front for a running session task.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    commands: mpsc::Sender<Command>,
    views: watch::Receiver<TimerView>,
}

/// Move `timer` onto its own task. Must be called inside a tokio runtime.
///
/// The task stops on [`DriverHandle::shutdown`] or when every
/// `DriverHandle` is dropped, and hands the timer back through the
/// returned join handle.
pub fn spawn_driver(
    timer: TimerHandle,
    options: DriverOptions,
) -> (DriverHandle, JoinHandle<TimerHandle>) {
    let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
    let (view_tx, views) = watch::channel(timer.view());
    let period = options.tick_period.max(MIN_TICK_PERIOD);
    let task = tokio::spawn(run(timer, rx, view_tx, period));
    (DriverHandle { commands, views }, task)
}

impl DriverHandle {
    pub async fn start(&self) -> Result<(), DriverError> {
        self.send(Command::Start).await
    }

    pub async fn pause(&self) -> Result<(), DriverError> {
        self.send(Command::Pause).await
    }

    pub async fn resume(&self) -> Result<(), DriverError> {
        self.send(Command::Resume).await
    }

    pub async fn reset(&self) -> Result<(), DriverError> {
        self.send(Command::Reset).await
    }

    /// Forward a "surface became hidden" edge.
    pub async fn notify_hidden(&self) -> Result<(), DriverError> {
        self.send(Command::Hidden).await
    }

    /// Current view, after every command sent before this call is applied.
    pub async fn view(&self) -> Result<TimerView, DriverError> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::View(tx)).await?;
        rx.await.map_err(|_| DriverError::Closed)
    }

    /// Receiver updated after every state change.
    pub fn subscribe(&self) -> watch::Receiver<TimerView> {
        self.views.clone()
    }

    pub async fn shutdown(&self) -> Result<(), DriverError> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, command: Command) -> Result<(), DriverError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| DriverError::Closed)
    }
}

async fn run(
    mut timer: TimerHandle,
    mut commands: mpsc::Receiver<Command>,
    views: watch::Sender<TimerView>,
    period: Duration,
) -> TimerHandle {
    let mut ticker: Option<Interval> = None;

    loop {
        tokio::select! {
            biased;

            command = commands.recv() => {
                let Some(command) = command else { break };
                trace!(?command, "driver command");
                match command {
                    Command::Start => { timer.start(); }
                    Command::Pause => { timer.pause(); }
                    Command::Resume => { timer.resume(); }
                    Command::Reset => { timer.reset(); }
                    Command::Hidden => { timer.notify_hidden(); }
                    Command::View(reply) => {
                        let _ = reply.send(timer.view());
                        continue;
                    }
                    Command::Shutdown => break,
                }
            }
            _ = next_tick(&mut ticker) => {
                timer.tick();
            }
        }

        sync_ticker(&timer, &mut ticker, period);
        views.send_replace(timer.view());
    }

    debug!("timer driver stopped");
    timer
}

/// Keep an interval alive exactly while the timer is running.
fn sync_ticker(timer: &TimerHandle, ticker: &mut Option<Interval>, period: Duration) {
    let running = timer.engine().is_running();
    match (running, ticker.is_some()) {
        (true, false) => {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            *ticker = Some(interval);
        }
        (false, true) => *ticker = None,
        _ => {}
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
