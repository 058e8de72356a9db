use crate::prelude::*;
use dlp_primitives::records::PROOF_SLOT;
use std::time::Duration;

/// Reward Submitter
///
/// Re-validates unrewarded files one at a time and requests their rewards.
/// A failing file becomes a `FAILED` outcome and never stops the loop.
pub struct RewardSubmitter<'a, R: ?Sized, P: ?Sized, S: ?Sized> {
    registry: &'a R,
    pool: &'a P,
    pause: &'a S,
    proof_index: u64,
    tx_delay: Duration,
}

impl<'a, R, P, S> RewardSubmitter<'a, R, P, S>
where
    R: FileRegistry + ?Sized,
    P: RewardPool + ?Sized,
    S: Pause + ?Sized,
{
    /// Creates a new reward submitter
    pub fn new(
        registry: &'a R,
        pool: &'a P,
        pause: &'a S,
        proof_index: u64,
        tx_delay: Duration,
    ) -> Self {
        Self {
            registry,
            pool,
            pause,
            proof_index,
            tx_delay,
        }
    }

    /// Processes `files` in order, one outcome per file
    ///
    /// Files missing on re-read produce no outcome.
    /// Only a failure to read the required instruction is returned as an error.
    pub async fn submit(&self, files: &[FileRecord]) -> Result<Vec<Outcome>> {
        info!("================ START REWARDING ================");
        let instruction = self.pool.proof_instruction().await?;
        debug!("Required proof instruction: {instruction}");

        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            let file_id = file.file_id;
            match self.process(file_id, &instruction).await {
                Ok(Some(outcome)) => outcomes.push(outcome),
                Ok(None) => {}
                Err(e) => {
                    error!("Error processing file {file_id}: {e:#}");
                    outcomes.push(Outcome::failed(file_id, format!("{e:#}")));
                }
            }
        }

        let count = |status: OutcomeStatus| outcomes.iter().filter(|o| o.status() == status).count();
        info!(
            "Rewarding done: {} succeeded, {} skipped, {} failed",
            count(OutcomeStatus::Success),
            count(OutcomeStatus::Skipped),
            count(OutcomeStatus::Failed),
        );
        info!("================ DONE REWARDING ================");

        Ok(outcomes)
    }

    /// Checks a single file against fresh on-chain state and rewards it
    async fn process(&self, file_id: u64, instruction: &str) -> Result<Option<Outcome>> {
        let file = self.pool.file(file_id).await?;
        let proof = self.registry.file_proof(file_id, PROOF_SLOT).await?;

        let Some(file) = file else {
            warn!("File {file_id} not found, skipping...");
            return Ok(None);
        };

        if file.is_rewarded() {
            let message = format!(
                "File {file_id} already has proof index {}, skipping...",
                file.proof_index
            );
            return Ok(Some(skip(file_id, message)));
        }

        if proof.instruction.is_empty() {
            let message = format!("File {file_id} has no instruction, skipping...");
            return Ok(Some(skip(file_id, message)));
        }

        if proof.instruction != instruction {
            let message = format!("File {file_id} has wrong instruction, skipping...");
            return Ok(Some(skip(file_id, message)));
        }

        info!("Requesting reward for file {file_id}");
        let tx_hash = self.pool.request_reward(file_id, self.proof_index).await?;
        let outcome = Outcome::success(file_id, tx_hash);
        info!("{outcome}");

        self.pause.pause(self.tx_delay).await;
        Ok(Some(outcome))
    }
}

fn skip(file_id: u64, message: String) -> Outcome {
    info!("{message}");
    Outcome::skipped(file_id, message)
}
