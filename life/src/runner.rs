// runner.rs - Cooperative continuous play

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::{debug, info};

use crate::session::Session;

/// Token for cooperative cancellation of a run.
///
/// Clone it to hand a copy to whoever decides when to stop (a signal handler,
/// a UI button); the run loop checks it before every step.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Reset the cancellation state (for reuse).
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The token was cancelled.
    Cancelled,
    /// The session's run flag was cleared, by a caller or by cycle detection.
    Stopped,
    /// The requested number of generations was reached.
    Limit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Generations computed during this run.
    pub generations: u64,
    pub reason: StopReason,
}

/// Steps `session` every `delay` until cancelled or stopped.
///
/// Each tick checks for cancellation, steps, renders, then sleeps for
/// `delay` so other tasks (input handling, signal listeners) get a turn
/// between generations.
///
/// ```no_run
/// use std::time::Duration;
/// use life::runner::{self, CancellationToken};
/// use life::session::Session;
///
/// # async fn demo() -> Result<(), life::GridError> {
/// let mut session = Session::new(30, 30)?;
/// session.start();
/// let token = CancellationToken::new();
/// let summary = runner::run(&mut session, Duration::from_millis(10), &token, |s| {
///     print!("{}", s.grid());
/// })
/// .await;
/// println!("stopped after {} generations", summary.generations);
/// # Ok(())
/// # }
/// ```
pub async fn run<F>(
    session: &mut Session,
    delay: Duration,
    token: &CancellationToken,
    render: F,
) -> RunSummary
where
    F: FnMut(&Session),
{
    drive(session, delay, token, None, render).await
}

/// Like [`run`], but ends after at most `generations` steps.
pub async fn run_for<F>(
    session: &mut Session,
    generations: u64,
    delay: Duration,
    token: &CancellationToken,
    render: F,
) -> RunSummary
where
    F: FnMut(&Session),
{
    drive(session, delay, token, Some(generations), render).await
}

async fn drive<F>(
    session: &mut Session,
    delay: Duration,
    token: &CancellationToken,
    limit: Option<u64>,
    mut render: F,
) -> RunSummary
where
    F: FnMut(&Session),
{
    info!(?delay, ?limit, "starting continuous run");
    let mut generations = 0;
    let reason = loop {
        if token.is_cancelled() {
            break StopReason::Cancelled;
        }
        if !session.is_running() {
            break StopReason::Stopped;
        }
        if limit.is_some_and(|limit| generations >= limit) {
            break StopReason::Limit;
        }

        session.step();
        generations += 1;
        render(session);

        tokio::time::sleep(delay).await;
    };
    debug!(generations, ?reason, "run finished");
    RunSummary {
        generations,
        reason,
    }
}
