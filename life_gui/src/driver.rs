// driver.rs - Fixed-period tick timer on the tokio runtime

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// One timer firing, tagged with the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub epoch: u64,
}

/// Called after every tick so the UI wakes up and drains it.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Fires ticks on a fixed period until stopped.
///
/// Ticks are queued on a channel and picked up by [`poll`](TickDriver::poll)
/// on the UI thread, so the simulation itself stays single-threaded. Every
/// `start`/`stop` moves to a new epoch; ticks from an earlier epoch are
/// dropped and never delivered.
pub struct TickDriver {
    handle: Handle,
    waker: Waker,
    tx: UnboundedSender<Tick>,
    rx: UnboundedReceiver<Tick>,
    task: Option<JoinHandle<()>>,
    epoch: u64,
}

impl TickDriver {
    pub fn new(handle: Handle, waker: Waker) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            waker,
            tx,
            rx,
            task: None,
            epoch: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.task.is_some()
    }

    /// (Re)start the timer. The first tick arrives one full period from now.
    pub fn start(&mut self, period: Duration) {
        self.stop();

        let tx = self.tx.clone();
        let waker = Arc::clone(&self.waker);
        let epoch = self.epoch;
        self.task = Some(self.handle.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick { epoch }).is_err() {
                    break;
                }
                waker();
            }
        }));
        log::debug!("tick driver started: every {period:?} (epoch {epoch})");
    }

    /// Cancel the timer and discard anything it already queued.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            log::debug!("tick driver stopped (epoch {})", self.epoch);
        }
        self.epoch += 1;
        while self.rx.try_recv().is_ok() {}
    }

    /// Number of ticks from the current run waiting to be applied.
    pub fn poll(&mut self) -> usize {
        let mut ticks = 0;
        while let Ok(tick) = self.rx.try_recv() {
            if tick.epoch == self.epoch {
                ticks += 1;
            }
        }
        ticks
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
