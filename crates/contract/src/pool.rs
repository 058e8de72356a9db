use crate::prelude::*;
use crate::to_u64;
use alloy::{network::ReceiptResponse, providers::DynProvider, sol};
use async_trait::async_trait;
use dlp_primitives::{FileRecord, RewardPool};

sol!(
    #[sol(rpc, all_derives)]
    interface DataLiquidityPool {
        struct FileResponse {
            uint256 fileId;
            uint256 timestamp;
            uint256 proofIndex;
            uint256 rewardAmount;
        }

        function files(uint256 fileId) external view returns (FileResponse memory);
        function proofInstruction() external view returns (string memory);
        function requestReward(uint256 registryFileId, uint256 proofIndex) external;
    }
);

/// Converts a pool response into a file record
///
/// The pool answers unknown ids with a zeroed response, which maps to `None`
pub(crate) fn file_record(
    response: DataLiquidityPool::FileResponse,
) -> anyhow::Result<Option<FileRecord>> {
    if response.fileId.is_zero() && response.timestamp.is_zero() && response.proofIndex.is_zero() {
        return Ok(None);
    }

    Ok(Some(FileRecord {
        file_id: to_u64(response.fileId, "fileId")?,
        timestamp: response.timestamp,
        proof_index: to_u64(response.proofIndex, "proofIndex")?,
        reward_amount: response.rewardAmount,
    }))
}

#[async_trait]
impl RewardPool for DataLiquidityPool::DataLiquidityPoolInstance<DynProvider> {
    async fn file(&self, file_id: u64) -> anyhow::Result<Option<FileRecord>> {
        let response = self.files(U256::from(file_id)).call().await?;
        file_record(response)
    }

    async fn proof_instruction(&self) -> anyhow::Result<String> {
        let instruction = self.proofInstruction().call().await?;
        Ok(instruction)
    }

    async fn request_reward(&self, file_id: u64, proof_index: u64) -> anyhow::Result<String> {
        let pending = self
            .requestReward(U256::from(file_id), U256::from(proof_index))
            .send()
            .await?;
        let tx_hash = *pending.tx_hash();
        info!("Transaction sent for file {file_id}: {tx_hash}");

        // Wait for the transaction to be mined
        let receipt = pending.get_receipt().await?;
        if !ReceiptResponse::status(&receipt) {
            return Err(anyhow::anyhow!("transaction {tx_hash} reverted"));
        }

        Ok(ReceiptResponse::transaction_hash(&receipt).to_string())
    }
}
