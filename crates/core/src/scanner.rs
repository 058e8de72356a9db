use crate::prelude::*;
use futures::future::try_join_all;
use std::time::Duration;

/// Scan Report
///
/// Files of the scanned range split by reward state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub unrewarded: Vec<FileRecord>,
    pub rewarded: Vec<FileRecord>,
}

impl ScanReport {
    fn classify(&mut self, file: FileRecord) {
        if file.is_rewarded() {
            self.rewarded.push(file);
        } else {
            self.unrewarded.push(file);
        }
    }
}

/// File Scanner
///
/// Walks a file id range in fixed-size batches, reads of a batch run concurrently
pub struct FileScanner<'a, R: ?Sized, P: ?Sized, S: ?Sized> {
    registry: &'a R,
    pool: &'a P,
    pause: &'a S,
    batch_size: u64,
    batch_delay: Duration,
}

impl<'a, R, P, S> FileScanner<'a, R, P, S>
where
    R: FileRegistry + ?Sized,
    P: RewardPool + ?Sized,
    S: Pause + ?Sized,
{
    /// Creates a new file scanner
    pub fn new(
        registry: &'a R,
        pool: &'a P,
        pause: &'a S,
        batch_size: u64,
        batch_delay: Duration,
    ) -> Self {
        Self {
            registry,
            pool,
            pause,
            batch_size: batch_size.max(1),
            batch_delay,
        }
    }

    /// Scans `[start_id, end_id]`, clamped to the registry's files count
    ///
    /// Any failed read aborts the whole scan
    pub async fn scan(&self, start_id: u64, end_id: u64) -> Result<ScanReport> {
        let files_count = self.registry.files_count().await?;
        let stop_id = end_id.min(files_count);
        info!("Scanning files {start_id} to {stop_id} (files count: {files_count})");

        let mut report = ScanReport::default();
        if start_id > stop_id {
            warn!("Empty scan range, nothing to do");
            return Ok(report);
        }

        let mut batch_start = start_id;
        loop {
            let batch_end = batch_start
                .saturating_add(self.batch_size - 1)
                .min(stop_id);
            info!("Files processing batch from {batch_start} to {batch_end}");

            // Fan out the batch, join before the next one
            let reads = (batch_start..=batch_end).map(|file_id| self.pool.file(file_id));
            let files = try_join_all(reads)
                .await
                .inspect_err(|e| error!("Error scanning batch {batch_start}..={batch_end}: {e:#}"))?;

            // Absent files are not classified
            for file in files.into_iter().flatten() {
                report.classify(file);
            }

            if batch_end >= stop_id {
                break;
            }

            debug!("Waiting {:?} before next batch...", self.batch_delay);
            self.pause.pause(self.batch_delay).await;
            batch_start = batch_end + 1;
        }

        info!(
            "Scan done: {} unrewarded, {} rewarded",
            report.unrewarded.len(),
            report.rewarded.len()
        );

        Ok(report)
    }
}
