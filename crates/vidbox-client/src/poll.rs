//! The status-polling loop.
//!
//! One cooperative tokio task per tracked job. Each tick fetches a snapshot,
//! runs it through the sequence gate, publishes it on a watch channel, and
//! stops the moment a terminal snapshot is applied. The caller owns the
//! returned [`PollHandle`]; cancelling (or dropping) it ends the loop at the
//! next scheduling point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use vidbox_models::Job;

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Orders poll responses by the request that produced them.
///
/// Every request is stamped with a monotonic sequence number; a response is
/// admitted only if its stamp exceeds the last admitted one, so a stale
/// response can never overwrite state from a later request. The loop
/// serializes requests today, which makes admission trivially monotonic, but
/// the gate keeps the ordering guarantee independent of that detail.
#[derive(Debug, Default)]
pub(crate) struct SequenceGate {
    issued: u64,
    applied: u64,
}

impl SequenceGate {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stamp the next outgoing request.
    pub(crate) fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Admit a response iff it is newer than everything applied so far.
    pub(crate) fn admit(&mut self, seq: u64) -> bool {
        if seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }
}

/// Owner's handle to a running polling loop.
///
/// Exactly one loop should be active per job; a caller replacing the
/// current job cancels (or drops) the old handle first. Cancellation is
/// cooperative: it takes effect before the next tick fires or before an
/// in-flight response is applied, and is a no-op once the loop has reached
/// a terminal snapshot.
#[derive(Debug)]
pub struct PollHandle {
    updates: watch::Receiver<Job>,
    cancelled: Arc<AtomicBool>,
    task: Option<JoinHandle<ClientResult<Job>>>,
}

impl PollHandle {
    /// Subscribe to snapshot updates. The channel is seeded with the
    /// submitted job and always holds the latest applied snapshot.
    pub fn updates(&self) -> watch::Receiver<Job> {
        self.updates.clone()
    }

    /// Latest applied snapshot.
    pub fn latest(&self) -> Job {
        self.updates.borrow().clone()
    }

    /// Request cooperative cancellation. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Wait for the loop to finish and return the final snapshot: terminal
    /// on the success and job-error paths, or the last applied snapshot
    /// when cancelled. `Err` only for a tripped consecutive-failure cap.
    pub async fn join(mut self) -> ClientResult<Job> {
        match self.task.take() {
            Some(task) => task
                .await
                .unwrap_or_else(|_| Err(ClientError::api("status polling task failed"))),
            None => Ok(self.latest()),
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        // A replaced or abandoned handle must not leak its timer.
        self.cancel();
    }
}

impl ApiClient {
    /// Start polling a submitted job at the configured fixed cadence.
    ///
    /// Requests are serialized: the next tick is scheduled from the
    /// completion of the previous request, so at most one status request is
    /// ever in flight for the job. The first request fires one interval
    /// after this call, mirroring the original timer behaviour.
    pub fn start_polling(&self, job: Job) -> PollHandle {
        let (tx, rx) = watch::channel(job.clone());
        let cancelled = Arc::new(AtomicBool::new(false));

        let task = tokio::spawn(poll_loop(self.clone(), job, tx, Arc::clone(&cancelled)));

        PollHandle {
            updates: rx,
            cancelled,
            task: Some(task),
        }
    }
}

async fn poll_loop(
    client: ApiClient,
    mut job: Job,
    tx: watch::Sender<Job>,
    cancelled: Arc<AtomicBool>,
) -> ClientResult<Job> {
    let interval = client.config().poll_interval;
    let failure_cap = client.config().max_transient_failures;
    let mut gate = SequenceGate::new();
    let mut consecutive_failures: u32 = 0;

    loop {
        if cancelled.load(Ordering::SeqCst) {
            debug!(job_id = %job.id, "polling cancelled");
            return Ok(job);
        }

        tokio::time::sleep(interval).await;

        if cancelled.load(Ordering::SeqCst) {
            debug!(job_id = %job.id, "polling cancelled");
            return Ok(job);
        }

        let seq = gate.issue();
        let polled = client.job_status(job.kind, &job.id).await;
        match polled {
            Ok(snapshot) => {
                // cancellation wins over an in-flight response
                if cancelled.load(Ordering::SeqCst) {
                    debug!(job_id = %job.id, "polling cancelled");
                    return Ok(job);
                }
                if !gate.admit(seq) {
                    continue;
                }
                consecutive_failures = 0;
                job = snapshot;
                let _ = tx.send(job.clone());

                if job.is_terminal() {
                    debug!(job_id = %job.id, status = %job.status, "job reached terminal state");
                    return Ok(job);
                }
            }
            Err(err) => {
                // transient: the next scheduled tick proceeds normally
                consecutive_failures += 1;
                debug!(
                    job_id = %job.id,
                    consecutive_failures,
                    "status check failed: {err}"
                );
                if let Some(cap) = failure_cap {
                    if consecutive_failures >= cap {
                        warn!(job_id = %job.id, cap, "giving up on status polling");
                        return Err(ClientError::PollExhausted(consecutive_failures));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_admits_in_order() {
        let mut gate = SequenceGate::new();
        let first = gate.issue();
        let second = gate.issue();
        assert!(gate.admit(first));
        assert!(gate.admit(second));
    }

    #[test]
    fn gate_discards_stale_responses() {
        let mut gate = SequenceGate::new();
        let first = gate.issue();
        let second = gate.issue();

        // the later request's response arrives first
        assert!(gate.admit(second));
        // the delayed response from the earlier request must be dropped
        assert!(!gate.admit(first));
        // and replays of the applied one too
        assert!(!gate.admit(second));
    }

    #[test]
    fn gate_sequence_is_monotonic() {
        let mut gate = SequenceGate::new();
        let stamps: Vec<u64> = (0..5).map(|_| gate.issue()).collect();
        assert_eq!(stamps, vec![1, 2, 3, 4, 5]);
    }
}
