use async_trait::async_trait;
use dlp_primitives::{FileProof, FileRecord, FileRegistry, Pause, RewardPool};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory registry and reward pool
#[derive(Debug, Default)]
pub struct MockChain {
    pub files_count: u64,
    pub files: HashMap<u64, FileRecord>,
    pub proofs: HashMap<u64, FileProof>,
    pub instruction: String,
    pub failing_count: bool,
    pub failing_instruction: bool,
    pub failing_reads: HashSet<u64>,
    pub failing_proofs: HashSet<u64>,
    pub failing_rewards: HashMap<u64, String>,
    pub reads: Mutex<Vec<u64>>,
    pub rewards: Mutex<Vec<(u64, u64)>>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl MockChain {
    pub fn new(files_count: u64, instruction: &str) -> Self {
        Self {
            files_count,
            instruction: instruction.to_string(),
            ..Default::default()
        }
    }

    /// Adds a file with a proof carrying `instruction`
    pub fn with_file(mut self, file_id: u64, proof_index: u64, instruction: &str) -> Self {
        self.files.insert(file_id, FileRecord::new(file_id, proof_index));
        self.proofs
            .insert(file_id, FileProof::with_instruction(instruction));
        self
    }

    pub fn failing_read(mut self, file_id: u64) -> Self {
        self.failing_reads.insert(file_id);
        self
    }

    pub fn failing_proof(mut self, file_id: u64) -> Self {
        self.failing_proofs.insert(file_id);
        self
    }

    pub fn failing_reward(mut self, file_id: u64, message: &str) -> Self {
        self.failing_rewards.insert(file_id, message.to_string());
        self
    }

    pub fn reads(&self) -> Vec<u64> {
        self.reads.lock().unwrap().clone()
    }

    pub fn rewards(&self) -> Vec<(u64, u64)> {
        self.rewards.lock().unwrap().clone()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn tx_hash(file_id: u64) -> String {
        format!("0x{file_id:064x}")
    }
}

#[async_trait]
impl FileRegistry for MockChain {
    async fn files_count(&self) -> anyhow::Result<u64> {
        if self.failing_count {
            anyhow::bail!("filesCount unavailable");
        }

        Ok(self.files_count)
    }

    async fn file_proof(&self, file_id: u64, _slot: u64) -> anyhow::Result<FileProof> {
        if self.failing_proofs.contains(&file_id) {
            anyhow::bail!("fileProofs({file_id}) timed out");
        }

        Ok(self.proofs.get(&file_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl RewardPool for MockChain {
    async fn file(&self, file_id: u64) -> anyhow::Result<Option<FileRecord>> {
        self.reads.lock().unwrap().push(file_id);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        // Let the other reads of the batch start
        tokio::task::yield_now().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_reads.contains(&file_id) {
            anyhow::bail!("files({file_id}) rate limited");
        }

        Ok(self.files.get(&file_id).cloned())
    }

    async fn proof_instruction(&self) -> anyhow::Result<String> {
        if self.failing_instruction {
            anyhow::bail!("proofInstruction unavailable");
        }

        Ok(self.instruction.clone())
    }

    async fn request_reward(&self, file_id: u64, proof_index: u64) -> anyhow::Result<String> {
        if let Some(message) = self.failing_rewards.get(&file_id) {
            anyhow::bail!("{message}");
        }

        self.rewards.lock().unwrap().push((file_id, proof_index));
        Ok(Self::tx_hash(file_id))
    }
}

/// Records pauses instead of sleeping
#[derive(Debug, Default)]
pub struct RecordingPause(Mutex<Vec<Duration>>);

impl RecordingPause {
    pub fn pauses(&self) -> Vec<Duration> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pause for RecordingPause {
    async fn pause(&self, duration: Duration) {
        self.0.lock().unwrap().push(duration);
    }
}
