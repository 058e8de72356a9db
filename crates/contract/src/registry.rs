use crate::prelude::*;
use crate::to_u64;
use alloy::{providers::DynProvider, sol};
use async_trait::async_trait;
use dlp_primitives::{FileProof, FileRegistry};

sol!(
    #[sol(rpc, all_derives)]
    interface DataRegistry {
        struct ProofData {
            uint256 score;
            uint256 dlpId;
            string metadata;
            string proofUrl;
            string instruction;
        }

        struct Proof {
            bytes signature;
            ProofData data;
        }

        function filesCount() external view returns (uint256);
        function fileProofs(uint256 fileId, uint256 index) external view returns (Proof memory);
    }
);

impl From<DataRegistry::Proof> for FileProof {
    fn from(proof: DataRegistry::Proof) -> Self {
        Self {
            signature: proof.signature.to_vec(),
            score: proof.data.score,
            dlp_id: proof.data.dlpId,
            metadata: proof.data.metadata,
            proof_url: proof.data.proofUrl,
            instruction: proof.data.instruction,
        }
    }
}

#[async_trait]
impl FileRegistry for DataRegistry::DataRegistryInstance<DynProvider> {
    async fn files_count(&self) -> anyhow::Result<u64> {
        let count = self.filesCount().call().await?;
        debug!("Registry files count: {count}");

        to_u64(count, "filesCount")
    }

    async fn file_proof(&self, file_id: u64, slot: u64) -> anyhow::Result<FileProof> {
        let proof = self
            .fileProofs(U256::from(file_id), U256::from(slot))
            .call()
            .await?;

        Ok(proof.into())
    }
}
