//! Call coalescing with a quiet window.
//!
//! A background thread receives calls over a channel and waits until no new
//! call has arrived for the whole window before handing the latest value to
//! the sink. Earlier values in the window are dropped.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Default quiet window for debounced saves.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Wait used while nothing is pending.
const IDLE_WAIT: Duration = Duration::from_secs(60);

/// The latest pending call and when it arrived.
///
/// Clock-free so the coalescing rules can be checked without sleeping.
#[derive(Debug)]
pub struct PendingCall<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> PendingCall<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// Record a call, replacing any earlier one and restarting the window.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Time left until the pending call fires, `None` if nothing is pending.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| self.window.saturating_sub(now.saturating_duration_since(*at)))
    }

    /// Take the pending value if its window has elapsed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        match self.remaining(now) {
            Some(left) if left.is_zero() => self.take(),
            _ => None,
        }
    }

    /// Take the pending value regardless of the window.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

enum Command<T> {
    Call(T),
    Flush(mpsc::SyncSender<()>),
}

/// Trailing-edge debouncer running on its own thread.
///
/// Dropping the debouncer fires any pending call before the thread exits.
pub struct Debouncer<T: Send + 'static> {
    tx: Option<mpsc::Sender<Command<T>>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn spawn<F>(window: Duration, sink: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || debounce_loop(rx, window, sink));
        Self {
            tx: Some(tx),
            handle: Some(handle),
        }
    }

    /// Schedule `value`, superseding any call still inside the window.
    pub fn call(&self, value: T) {
        if let Some(tx) = &self.tx {
            if tx.send(Command::Call(value)).is_err() {
                tracing::error!("Debounce thread is gone; call dropped");
            }
        }
    }

    /// Fire the pending call now, if any, and wait until the sink returned.
    pub fn flush(&self) {
        let Some(tx) = &self.tx else {
            return;
        };
        let (ack_tx, ack_rx) = mpsc::sync_channel(1);
        if tx.send(Command::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // Closing the channel makes the loop fire what is pending and exit.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn debounce_loop<T, F>(rx: mpsc::Receiver<Command<T>>, window: Duration, mut sink: F)
where
    F: FnMut(T),
{
    let mut pending = PendingCall::new(window);

    loop {
        let timeout = pending.remaining(Instant::now()).unwrap_or(IDLE_WAIT);

        match rx.recv_timeout(timeout) {
            Ok(Command::Call(value)) => pending.push(value, Instant::now()),
            Ok(Command::Flush(ack)) => {
                if let Some(value) = pending.take() {
                    sink(value);
                }
                let _ = ack.send(());
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Some(value) = pending.take_due(Instant::now()) {
                    sink(value);
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(value) = pending.take() {
                    sink(value);
                }
                break;
            }
        }
    }
}
