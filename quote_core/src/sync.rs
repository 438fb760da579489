//! Periodic reconciliation with the remote endpoint.
//!
//! A sync cycle is fetch → merge → persist:
//! - [`Reconciler::run_cycle`] performs one cycle against a shared [`QuoteBook`].
//!   The network fetch happens without holding the book lock; the merge and the
//!   persist step run under it.
//! - [`SyncScheduler::start`] spawns a timer thread that launches a cycle every
//!   interval, plus on demand through [`SyncHandle::trigger`].
//!
//! Concurrency:
//! - Each cycle runs on its own short-lived thread so a slow fetch never delays the
//!   timer. Cycles are mutually exclusive through an in-progress flag: a cycle that
//!   starts while another one is running is skipped, not queued or interleaved.
//! - A failed fetch aborts only the current cycle. There is no backoff; the next
//!   tick retries on its own.

use crate::bus::EventBus;
use crate::book::QuoteBook;
use crate::model::event::{Notification, QuoteEvent};
use crate::model::record::QuoteRecord;
use crate::remote::RemoteSource;
use crate::result::Result;
use crossbeam_channel::{Sender, select, tick, unbounded};
use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Result of one sync cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Another cycle was already running.
    Skipped,
    /// The fetch failed; nothing was touched.
    Failed(String),
    /// The remote snapshot matched the local collection.
    Unchanged,
    /// The local collection was updated and persisted.
    Updated {
        /// Remote records appended.
        added: usize,
        /// Local records overwritten.
        updated: usize,
    },
}

/// Marks a cycle as running for as long as it lives.
struct CycleGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> CycleGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| CycleGuard { flag })
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Runs sync cycles between a remote source and a shared quote book.
pub struct Reconciler {
    remote: Arc<dyn RemoteSource>,
    book: Arc<Mutex<QuoteBook>>,
    bus: EventBus,
    in_progress: AtomicBool,
}

impl Reconciler {
    /// Bind `remote` to `book`; notifications go to the book's bus.
    pub fn new(remote: Arc<dyn RemoteSource>, book: Arc<Mutex<QuoteBook>>) -> Result<Self> {
        let bus = book.lock()?.bus().clone();
        Ok(Self {
            remote,
            book,
            bus,
            in_progress: AtomicBool::new(false),
        })
    }

    /// `true` while a cycle is running.
    pub fn is_running(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Run one fetch → merge → persist cycle.
    ///
    /// Fetch failures are reported through the bus and returned as
    /// `CycleOutcome::Failed`; only persistence failures come back as `Err`.
    pub fn run_cycle(&self) -> Result<CycleOutcome> {
        let Some(_guard) = CycleGuard::try_acquire(&self.in_progress) else {
            info!("Sync cycle skipped: previous cycle still running");
            return Ok(CycleOutcome::Skipped);
        };

        let remote = match self.remote.fetch() {
            Ok(records) => records,
            Err(e) => {
                warn!("Sync fetch failed: {}", e);
                self.bus
                    .notify(Notification::error(format!("Sync failed: {}", e)));
                return Ok(CycleOutcome::Failed(e.to_string()));
            }
        };
        debug!("Sync fetched {} remote quotes", remote.len());

        let merge = {
            let mut book = self.book.lock()?;
            book.apply_remote(&remote)?
        };

        if merge.changed {
            self.bus
                .notify(Notification::info("Quotes updated from server."));
            Ok(CycleOutcome::Updated {
                added: merge.added,
                updated: merge.updated,
            })
        } else {
            Ok(CycleOutcome::Unchanged)
        }
    }

    /// Send a newly created quote to the remote endpoint, fire-and-forget.
    ///
    /// The outcome never affects local state; a failure is logged and surfaced as
    /// a warning notice.
    pub fn submit(&self, record: &QuoteRecord) {
        match self.remote.submit(record) {
            Ok(()) => debug!("Quote {:?} submitted", record.id),
            Err(e) => {
                warn!("Quote submission failed: {}", e);
                self.bus
                    .notify(Notification::warning(format!("Could not send quote to server: {}", e)));
            }
        }
    }
}

/// Control handle of a running scheduler.
pub struct SyncHandle {
    stop_tx: Sender<()>,
    trigger_tx: Sender<()>,
    worker: JoinHandle<()>,
}

impl SyncHandle {
    /// Ask for an immediate cycle ("sync now").
    pub fn trigger(&self) {
        if self.trigger_tx.send(()).is_err() {
            warn!("Sync scheduler is gone, trigger ignored");
        }
    }

    /// Stop the timer thread and wait for it. A cycle already in flight finishes on its own.
    pub fn stop(self) {
        let _ = self.stop_tx.send(());
        if self.worker.join().is_err() {
            error!("Sync scheduler thread panicked");
        }
    }
}

/// Fixed-period timer driving [`Reconciler::run_cycle`].
pub struct SyncScheduler;

impl SyncScheduler {
    /// Start the timer thread. The first cycle runs after one full `interval`.
    pub fn start(reconciler: Arc<Reconciler>, interval: Duration) -> SyncHandle {
        let (stop_tx, stop_rx) = unbounded::<()>();
        let (trigger_tx, trigger_rx) = unbounded::<()>();

        let worker = thread::spawn(move || {
            info!("Sync scheduler started, interval {:?}", interval);
            let ticker = tick(interval);
            loop {
                select! {
                    recv(stop_rx) -> _ => break,
                    recv(ticker) -> _ => spawn_cycle(Arc::clone(&reconciler)),
                    recv(trigger_rx) -> msg => match msg {
                        Ok(()) => spawn_cycle(Arc::clone(&reconciler)),
                        Err(_) => break,
                    },
                }
            }
            reconciler.bus.publish(QuoteEvent::Shutdown);
            info!("Sync scheduler stopping...");
        });

        SyncHandle {
            stop_tx,
            trigger_tx,
            worker,
        }
    }
}

fn spawn_cycle(reconciler: Arc<Reconciler>) {
    if reconciler.is_running() {
        info!("Sync cycle skipped: previous cycle still running");
        return;
    }
    thread::spawn(move || match reconciler.run_cycle() {
        Ok(outcome) => debug!("Sync cycle finished: {:?}", outcome),
        Err(e) => error!("Sync cycle failed to persist: {}", e),
    });
}
