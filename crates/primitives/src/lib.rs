pub mod outcome;
pub mod records;

pub use outcome::{Outcome, OutcomeStatus};
pub use records::{FileProof, FileRecord};

use async_trait::async_trait;
use std::time::Duration;

/// File Registry
///
/// Read side of the contract that registers files and their proofs
#[async_trait]
pub trait FileRegistry: Send + Sync {
    /// Total number of registered files
    async fn files_count(&self) -> anyhow::Result<u64>;

    /// Proof submitted for a file at the given slot
    async fn file_proof(&self, file_id: u64, slot: u64) -> anyhow::Result<FileProof>;
}

/// Reward Pool
///
/// Contract that tracks per-file rewards and accepts reward requests
#[async_trait]
pub trait RewardPool: Send + Sync {
    /// Snapshot of a file's reward fields, `None` if the pool has no such file
    async fn file(&self, file_id: u64) -> anyhow::Result<Option<FileRecord>>;

    /// Instruction every reward-eligible proof must carry
    async fn proof_instruction(&self) -> anyhow::Result<String>;

    /// Submits a reward claim and waits for it to be mined
    ///
    /// Returns the confirmed transaction hash
    async fn request_reward(&self, file_id: u64, proof_index: u64) -> anyhow::Result<String>;
}

/// Pause
///
/// Suspends the current task, used for fixed rate-limiting delays
#[async_trait]
pub trait Pause: Send + Sync {
    async fn pause(&self, duration: Duration);
}
