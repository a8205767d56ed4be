//! Background filesystem change monitoring for the upload directory.
//!
//! Fire-and-forget observability: each create, modify, or rename event in
//! the upload directory becomes one log line. Nothing else consumes the
//! events, nothing is queued or retried on delivery failure.

use notify::event::ModifyKind;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// How often the task wakes with no events pending, purely to return to the
/// select loop where the cancellation token is re-checked.
const IDLE_WAKE_INTERVAL: Duration = Duration::from_secs(60);

/// Capacity of the channel bridging the watcher callback thread into the
/// async task. A full channel drops the event; delivery is best-effort.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Handle to the long-lived watcher task.
///
/// One monitor is started at process startup and holds a single watch
/// subscription on the upload directory until its cancellation token fires,
/// at which point the subscription is torn down exactly once and the task
/// exits.
pub struct ChangeMonitor {
    handle: JoinHandle<()>,
}

impl ChangeMonitor {
    /// Spawn the watcher task over `dir`, non-recursive.
    ///
    /// Failure to establish the subscription is logged and the task exits;
    /// it never takes the process down.
    pub fn spawn(dir: impl Into<PathBuf>, cancel: CancellationToken) -> Self {
        let handle = tokio::spawn(run(dir.into(), cancel));
        Self { handle }
    }

    /// Wait for the task to exit after its token has been cancelled.
    pub async fn shutdown(self) {
        if let Err(err) = self.handle.await {
            tracing::warn!(error = %err, "change monitor task did not exit cleanly");
        }
    }
}

async fn run(dir: PathBuf, cancel: CancellationToken) {
    let (tx, mut rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    // The callback runs on the notify worker thread; try_send keeps it from
    // ever blocking on the channel.
    let mut watcher = match notify::recommended_watcher(move |event| {
        let _ = tx.try_send(event);
    }) {
        Ok(watcher) => watcher,
        Err(err) => {
            tracing::error!(error = %err, "failed to create filesystem watcher");
            return;
        }
    };

    if let Err(err) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        tracing::error!(error = %err, dir = %dir.display(), "failed to watch upload directory");
        return;
    }

    tracing::info!(dir = %dir.display(), "change monitor started");

    let mut idle = tokio::time::interval(IDLE_WAKE_INTERVAL);
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            // Idle wake with nothing to do; cancellation is re-checked on
            // the next loop turn.
            _ = idle.tick() => {}
            received = rx.recv() => match received {
                Some(Ok(event)) => log_event(&event),
                Some(Err(err)) => tracing::warn!(error = %err, "watch error"),
                None => break,
            },
        }
    }

    // Dropping the watcher releases the subscription.
    drop(watcher);
    tracing::info!(dir = %dir.display(), "change monitor stopped");
}

fn log_event(event: &Event) {
    let Some(kind) = describe_kind(&event.kind) else {
        return;
    };
    for path in &event.paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!(file = %name, kind, "file changed");
    }
}

/// Event kinds worth a log line: creations, content writes, renames.
fn describe_kind(kind: &EventKind) -> Option<&'static str> {
    match kind {
        EventKind::Create(_) => Some("created"),
        EventKind::Modify(ModifyKind::Name(_)) => Some("renamed"),
        EventKind::Modify(_) => Some("modified"),
        _ => None,
    }
}
