//! # Script Runner
//!
//! File: cli/src/chat/runner.rs
//!
//! Plays a `Script` against a `Presenter`. Every delay races the sequence's
//! cancellation token, so a reset stops a running response before its next
//! step renders. Presenter failures are logged and skipped.
//!
use super::script::{Script, Step};
use crate::common::ui::{best_effort, Presenter};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Completed,
    Cancelled,
}

/// Plays `script` step by step. `pace` scales every delay; `0.0` plays the
/// script instantly.
pub async fn play<P: Presenter + ?Sized>(
    script: Script,
    presenter: &mut P,
    pace: f64,
    token: &CancellationToken,
) -> Playback {
    for step in script {
        if token.is_cancelled() {
            return Playback::Cancelled;
        }
        trace!("Playing step: {:?}", step);
        match step {
            Step::Typing { delay, message } => {
                best_effort("show typing indicator", presenter.show_typing());
                if !wait(delay, pace, token).await {
                    return Playback::Cancelled;
                }
                best_effort("render message", presenter.replace_typing(&message));
            }
            Step::Pause(delay) => {
                if !wait(delay, pace, token).await {
                    return Playback::Cancelled;
                }
            }
            Step::OpenExternal(url) => {
                best_effort("open external link", presenter.open_external(&url))
            }
            Step::Notice(text) => best_effort("render notice", presenter.notice(&text)),
            Step::LinkNotice { prefix, link } => {
                best_effort("render link", presenter.link_notice(&prefix, &link))
            }
            Step::Lock => best_effort("lock input", presenter.set_locked(true)),
        }
    }
    Playback::Completed
}

/// Sleeps for the scaled delay. Returns `false` if cancelled first.
async fn wait(delay: Duration, pace: f64, token: &CancellationToken) -> bool {
    let delay = scaled(delay, pace);
    if delay.is_zero() {
        return !token.is_cancelled();
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

/// Scales `delay` by `pace`, saturating at `Duration::MAX`.
fn scaled(delay: Duration, pace: f64) -> Duration {
    Duration::try_from_secs_f64(delay.as_secs_f64() * pace).unwrap_or(Duration::MAX)
}
