//! Single execution lane
//!
//! One task owns the `StakingPool`; every call goes through a bounded
//! channel and runs to completion before the next is received. Callers get
//! the outcome plus the events the call recorded.

use log::{debug, info, warn};
use serde::Serialize;
use stakepool_common::StakeError;
use stakepool_program::{Outcome, PoolEvent, StakingPool};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::journal::{JournalEntry, JournalLine};
use crate::summary::ReplayStats;

/// Result of one call, as seen by the submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub outcome: Result<Outcome, StakeError>,
    pub events: Vec<PoolEvent>,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LaneError {
    #[error("execution lane has shut down")]
    Closed,
    #[error("execution lane dropped the reply")]
    NoReply,
}

struct Request {
    entry: JournalEntry,
    reply: oneshot::Sender<Reply>,
}

/// Submission side of the lane; cheap to clone
#[derive(Clone)]
pub struct LaneHandle {
    tx: mpsc::Sender<Request>,
}

impl LaneHandle {
    /// Submit one call and wait for its reply
    pub async fn submit(&self, entry: JournalEntry) -> Result<Reply, LaneError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(Request { entry, reply })
            .await
            .map_err(|_| LaneError::Closed)?;
        rx.await.map_err(|_| LaneError::NoReply)
    }
}

/// Start the lane. The task ends once every handle is dropped and returns
/// the engine with all committed state.
pub fn spawn(engine: StakingPool, capacity: usize) -> (LaneHandle, JoinHandle<StakingPool>) {
    let (tx, rx) = mpsc::channel(capacity);
    let worker = tokio::spawn(run(engine, rx));
    (LaneHandle { tx }, worker)
}

/// Replay journal lines through the lane in order
///
/// An undecodable line is rejected with `InvalidInstruction` and the replay
/// moves on; only a lane shutdown stops it early.
pub async fn replay(
    lane: &LaneHandle,
    lines: Vec<JournalLine>,
) -> Result<ReplayStats, LaneError> {
    let mut stats = ReplayStats::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let entry = match line {
            Ok(entry) => entry,
            Err(bad) => {
                warn!("call {} rejected: {} ({})", idx + 1, bad, bad.kind());
                stats.record(&Err(bad.kind()));
                continue;
            }
        };

        let reply = lane.submit(entry).await?;
        match &reply.outcome {
            Ok(outcome) => debug!("call {} ok: {:?}", idx + 1, outcome),
            Err(e) => warn!("call {} rejected: {} (code {})", idx + 1, e, e.code()),
        }
        stats.record(&reply.outcome);
        stats.events = stats.events.saturating_add(reply.events.len() as u64);
    }

    Ok(stats)
}

async fn run(mut engine: StakingPool, mut rx: mpsc::Receiver<Request>) -> StakingPool {
    while let Some(Request { entry, reply }) = rx.recv().await {
        let outcome = engine.process(entry.caller, entry.timestamp, &entry.instruction);
        let events = engine.drain_events();

        for event in &events {
            info!("pool {} event: {:?}", event.pool_id(), event);
        }

        if reply.send(Reply { outcome, events }).is_err() {
            debug!("submitter went away before the reply");
        }
    }

    debug!("execution lane drained");
    engine
}
