//! Call journal - one JSON object per line
//!
//! Each entry carries the authenticated caller, the trusted timestamp and the
//! instruction, e.g.
//!
//! ```text
//! {"caller":"4vJ9...","timestamp":1700000000,"instruction":{"stake":{"pool_id":1,"amount":500}}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stakepool_common::{Identity, Instruction, StakeError, Timestamp};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Authenticated caller
    pub caller: Identity,
    /// Trusted environment timestamp (seconds)
    pub timestamp: Timestamp,
    /// Call to apply
    pub instruction: Instruction,
}

/// A journal line that does not decode into a call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("journal line {line}: {reason}")]
pub struct BadLine {
    /// 1-based line number
    pub line: usize,
    pub reason: String,
}

impl BadLine {
    /// Kind reported for the rejected call
    pub fn kind(&self) -> StakeError {
        StakeError::InvalidInstruction
    }
}

/// One decoded journal line, or why it could not be decoded
pub type JournalLine = std::result::Result<JournalEntry, BadLine>;

/// Parse journal text
///
/// Undecodable lines are kept in place as `BadLine` so the replay can
/// reject them and carry on with the rest.
pub fn parse_journal(text: &str) -> Vec<JournalLine> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| {
            serde_json::from_str::<JournalEntry>(text).map_err(|e| BadLine {
                line,
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Read and parse a journal file
pub fn read_journal(path: &Path) -> Result<Vec<JournalLine>> {
    let text = std::fs::read_to_string(path)
        .context(format!("Failed to read journal: {}", path.display()))?;
    Ok(parse_journal(&text))
}
