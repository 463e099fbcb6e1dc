use clap::Subcommand;
use chrono::Utc;
use sumteo_core::{
    Config, DriverOptions, PauseReason, ReadingProof, SessionType, TimerConfig, TimerHandle,
    TimerView, VisibilityEdge, VisibilityTracker, spawn_driver,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run a live focus session in the terminal
    ///
    /// Type a command and press enter: p pause, r resume, s start,
    /// x reset, h surface hidden, v surface visible, q quit.
    Run {
        /// Session length in minutes (defaults to timer.target_minutes)
        #[arg(long, conflicts_with = "seconds")]
        minutes: Option<u64>,
        /// Session length in seconds
        #[arg(long)]
        seconds: Option<u64>,
        /// Book being read; prints a proof memo on completion
        #[arg(long)]
        book: Option<String>,
        /// Pages read during the session
        #[arg(long, default_value = "0")]
        pages: u32,
    },
    /// Deliver ticks without a clock and print the resulting state as JSON
    Simulate {
        /// Session length in seconds
        #[arg(long)]
        seconds: u64,
        /// Number of ticks to deliver after start
        #[arg(long)]
        ticks: u64,
        /// Report the surface hidden before this tick (0-based)
        #[arg(long)]
        hide_after: Option<u64>,
    },
}

struct LiveSession {
    config: TimerConfig,
    options: DriverOptions,
    pause_on_hidden: bool,
    book: Option<String>,
    pages: u32,
    session_type: SessionType,
}

fn session_config(
    config: &Config,
    minutes: Option<u64>,
    seconds: Option<u64>,
) -> Result<TimerConfig, Box<dyn std::error::Error>> {
    let cfg = match (minutes, seconds) {
        (_, Some(secs)) => TimerConfig::new(secs)?,
        (Some(min), None) => TimerConfig::from_minutes(min)?,
        (None, None) => config.timer_config()?,
    };
    Ok(cfg)
}

fn print_view(view: &TimerView) {
    println!("{}  {:>5.1}%  {}", view.display, view.progress_pct, view.label());
}

async fn run_live(session: LiveSession) -> Result<(), Box<dyn std::error::Error>> {
    let mut timer = TimerHandle::new(session.config);
    timer.on_pause(|reason| {
        if reason == PauseReason::Hidden {
            eprintln!("Timer paused - you left the app!");
        }
    });
    timer.on_complete(|| eprintln!("Reading session complete."));

    let (driver, task) = spawn_driver(timer, session.options);
    let mut views = driver.subscribe();
    driver.start().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let mut visibility = VisibilityTracker::new();

    loop {
        tokio::select! {
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = views.borrow_and_update().clone();
                print_view(&view);
                if view.is_complete() {
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    continue;
                };
                match line.trim() {
                    "" => {}
                    "q" => break,
                    "p" => driver.pause().await?,
                    "r" => driver.resume().await?,
                    "s" => driver.start().await?,
                    "x" => driver.reset().await?,
                    "h" => {
                        if visibility.observe(true) == Some(VisibilityEdge::Hidden)
                            && session.pause_on_hidden
                        {
                            driver.notify_hidden().await?;
                        }
                    }
                    "v" => {
                        visibility.observe(false);
                    }
                    other => eprintln!("unknown command: {other} (p/r/s/x/h/v/q)"),
                }
            }
        }
    }

    let view = driver.view().await?;
    debug!(status = ?view.status, elapsed_secs = view.elapsed_secs, "live session ended");
    driver.shutdown().await?;
    task.await?;

    if let (true, Some(book)) = (view.is_complete(), session.book.as_deref()) {
        let proof =
            ReadingProof::from_completed(&view, book, session.pages, session.session_type, Utc::now())?;
        println!("{}", proof.to_memo()?);
    }
    Ok(())
}

fn simulate(
    seconds: u64,
    ticks: u64,
    hide_after: Option<u64>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let mut timer = TimerHandle::new(TimerConfig::new(seconds)?);
    let mut events = Vec::new();
    events.extend(timer.start());
    for i in 0..ticks {
        if hide_after == Some(i) {
            events.extend(timer.notify_hidden());
        }
        events.extend(timer.tick());
    }
    Ok(serde_json::json!({
        "events": events,
        "snapshot": timer.engine().snapshot(),
    }))
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TimerAction::Run {
            minutes,
            seconds,
            book,
            pages,
        } => {
            let config = Config::load_or_default();
            let session = LiveSession {
                config: session_config(&config, minutes, seconds)?,
                options: config.driver_options(),
                pause_on_hidden: config.timer.pause_on_hidden,
                book: book.or_else(|| {
                    let default = config.proof.default_book.trim();
                    (!default.is_empty()).then(|| default.to_string())
                }),
                pages,
                session_type: config.proof.session_type,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            let outcome = runtime.block_on(run_live(session));
            // A pending stdin read holds a blocking thread until the next line.
            runtime.shutdown_background();
            outcome?;
        }
        TimerAction::Simulate {
            seconds,
            ticks,
            hide_after,
        } => {
            let output = simulate(seconds, ticks, hide_after)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_reports_final_snapshot() {
        let output = simulate(5, 3, None).unwrap();
        assert_eq!(output["snapshot"]["display"], "00:02");
        assert_eq!(output["snapshot"]["status"], "running");
    }

    #[test]
    fn simulate_hidden_freezes_progress() {
        let output = simulate(5, 4, Some(2)).unwrap();
        assert_eq!(output["snapshot"]["status"], "paused");
        assert_eq!(output["snapshot"]["elapsed_secs"], 2);
    }

    #[test]
    fn seconds_override_config() {
        let config = Config::default();
        assert_eq!(session_config(&config, None, Some(5)).unwrap().target_secs(), 5);
        assert_eq!(session_config(&config, Some(2), None).unwrap().target_secs(), 120);
        assert_eq!(session_config(&config, None, None).unwrap().target_secs(), 1800);
        assert!(session_config(&config, None, Some(0)).is_err());
    }
}
