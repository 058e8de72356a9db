use alloy_primitives::U256;

/// Proof slot read when validating a file
pub const PROOF_SLOT: u64 = 1;

/// File Record
///
/// Snapshot of a file as seen by the reward pool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub file_id: u64,
    pub timestamp: U256,
    pub proof_index: u64,
    pub reward_amount: U256,
}

impl FileRecord {
    /// Creates a record with no reward data
    pub fn new(file_id: u64, proof_index: u64) -> Self {
        Self {
            file_id,
            timestamp: U256::ZERO,
            proof_index,
            reward_amount: U256::ZERO,
        }
    }

    /// Whether a proof was already assigned to the file
    pub fn is_rewarded(&self) -> bool {
        self.proof_index > 0
    }
}

/// File Proof
///
/// Proof attached to a file in the registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileProof {
    pub signature: Vec<u8>,
    pub score: U256,
    pub dlp_id: U256,
    pub metadata: String,
    pub proof_url: String,
    pub instruction: String,
}

impl FileProof {
    /// Creates a proof carrying only an instruction
    pub fn with_instruction(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            ..Default::default()
        }
    }
}
