use crate::config::Config;
use crate::prelude::*;
use crate::report::RewardLog;
use crate::scanner::FileScanner;
use crate::submitter::RewardSubmitter;

/// Rewarder
///
/// Runs one scan, submit and log pass over the configured file range
pub struct Rewarder<'a, R: ?Sized, P: ?Sized, S: ?Sized> {
    config: &'a Config,
    registry: &'a R,
    pool: &'a P,
    pause: &'a S,
    log: RewardLog,
}

impl<'a, R, P, S> Rewarder<'a, R, P, S>
where
    R: FileRegistry + ?Sized,
    P: RewardPool + ?Sized,
    S: Pause + ?Sized,
{
    /// Creates a new rewarder over an opened reward log
    pub fn new(config: &'a Config, registry: &'a R, pool: &'a P, pause: &'a S, log: RewardLog) -> Self {
        Self {
            config,
            registry,
            pool,
            pause,
            log,
        }
    }

    /// Runs the pass
    ///
    /// A scan error aborts before anything is submitted or logged
    pub async fn run(&self) -> Result<Vec<Outcome>> {
        let config = self.config;

        let scanner = FileScanner::new(
            self.registry,
            self.pool,
            self.pause,
            config.batch_size,
            config.batch_delay,
        );
        let report = scanner
            .scan(config.start_file_id, config.end_file_id)
            .await?;

        let submitter = RewardSubmitter::new(
            self.registry,
            self.pool,
            self.pause,
            config.proof_index,
            config.tx_delay,
        );
        let outcomes = submitter.submit(&report.unrewarded).await?;

        self.log.append(&outcomes)?;
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockChain, RecordingPause};
    use dlp_contract::prelude::{Address, B256};
    use std::time::Duration;

    const INSTRUCTION: &str = "ipfs://instruction-v1";

    fn config(log_path: std::path::PathBuf) -> Config {
        Config {
            rpc_url: "http://127.0.0.1:8545".into(),
            private_key: B256::repeat_byte(1),
            registry_address: Address::ZERO,
            pool_address: Address::ZERO,
            chain_id: None,
            start_file_id: 100,
            end_file_id: 103,
            batch_size: 2,
            batch_delay: Duration::from_millis(500),
            tx_delay: Duration::from_millis(1000),
            proof_index: 1,
            log_path,
        }
    }

    #[tokio::test]
    async fn scans_submits_and_logs() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config(dir.path().join("output").join("rewarding.log"));
        let chain = MockChain::new(102, INSTRUCTION)
            .with_file(100, 0, INSTRUCTION)
            .with_file(101, 5, INSTRUCTION)
            .with_file(102, 0, "ipfs://stale")
            .with_file(103, 0, INSTRUCTION);
        let pause = RecordingPause::default();
        let log = RewardLog::open(&config.log_path)?;

        let outcomes = Rewarder::new(&config, &chain, &chain, &pause, log)
            .run()
            .await?;

        assert_eq!(
            outcomes,
            vec![
                Outcome::success(100, MockChain::tx_hash(100)),
                Outcome::skipped(102, "File 102 has wrong instruction, skipping..."),
            ]
        );
        assert_eq!(chain.rewards(), vec![(100, 1)]);
        assert_eq!(
            pause.pauses(),
            vec![Duration::from_millis(500), Duration::from_millis(1000)]
        );

        let content = std::fs::read_to_string(&config.log_path)?;
        assert!(content.contains("│ 100      │ Transaction confirmed for file 100"));
        assert!(content.contains(&MockChain::tx_hash(100)));
        assert!(content.contains("│ 102      │ File 102 has wrong instruction, skipping..."));
        Ok(())
    }

    #[tokio::test]
    async fn scan_failure_submits_nothing() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = config(dir.path().join("rewarding.log"));
        let chain = MockChain::new(102, INSTRUCTION)
            .with_file(100, 0, INSTRUCTION)
            .failing_read(102);
        let pause = RecordingPause::default();
        let log = RewardLog::open(&config.log_path)?;

        let result = Rewarder::new(&config, &chain, &chain, &pause, log).run().await;

        assert!(result.is_err());
        assert!(chain.rewards().is_empty());
        assert!(!config.log_path.exists());
        Ok(())
    }
}
