use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time;

/// Quiet period applied to search input before it takes effect.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Cancellable quiet-period timer for search input.
///
/// Each scheduled value replaces any value still waiting; only the last one
/// survives the quiet period and is delivered on the commit channel. The
/// session loop owns the receiving half, so commits join the same serial
/// event stream as every other table event.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    tx: mpsc::UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Replace any pending value and restart the quiet period.
    pub fn schedule(&mut self, value: String) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            time::sleep(delay).await;
            // send fails only when the session is gone
            let _ = tx.send(value);
        }));
    }

    /// Discard any value still waiting without delivering it.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| !p.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
