use std::fmt::{Display, Formatter, Result};

/// Outcome status
///
/// Final state of a single file after the submit phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeStatus {
    Success,
    Skipped,
    Failed,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Skipped => "SKIPPED",
            Self::Failed => "FAILED",
        }
    }
}

impl Display for OutcomeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Outcome
///
/// Result of processing one file, the transaction hash is only set on success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    file_id: u64,
    message: String,
    status: OutcomeStatus,
    tx_hash: String,
}

impl Outcome {
    fn new(file_id: u64, message: String, status: OutcomeStatus, tx_hash: String) -> Self {
        Self {
            file_id,
            message,
            status,
            tx_hash,
        }
    }

    /// Confirmed reward transaction
    pub fn success(file_id: u64, tx_hash: impl Into<String>) -> Self {
        let message = format!("Transaction confirmed for file {file_id}");
        Self::new(file_id, message, OutcomeStatus::Success, tx_hash.into())
    }

    /// File not eligible for a reward
    pub fn skipped(file_id: u64, message: impl Into<String>) -> Self {
        Self::new(file_id, message.into(), OutcomeStatus::Skipped, String::new())
    }

    /// Processing the file raised an error
    pub fn failed(file_id: u64, message: impl Into<String>) -> Self {
        Self::new(file_id, message.into(), OutcomeStatus::Failed, String::new())
    }

    pub fn file_id(&self) -> u64 {
        self.file_id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> OutcomeStatus {
        self.status
    }

    pub fn tx_hash(&self) -> &str {
        &self.tx_hash
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} [{}] {}", self.file_id, self.status, self.message)?;
        if !self.tx_hash.is_empty() {
            write!(f, " ({})", self.tx_hash)?;
        }

        Ok(())
    }
}
