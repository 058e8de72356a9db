pub mod config;
pub mod pause;
pub mod report;
pub mod rewarder;
pub mod scanner;
pub mod submitter;

#[cfg(test)]
mod mock;

// Crate Public API
pub use config::{Config, ConfigError};
pub use pause::TokioPause;
pub use report::RewardLog;
pub use rewarder::Rewarder;
pub use scanner::{FileScanner, ScanReport};
pub use submitter::RewardSubmitter;

// Crate Prelude
pub mod prelude {
    pub use anyhow::{Result, anyhow};
    pub use dlp_primitives::{
        FileProof, FileRecord, FileRegistry, Outcome, OutcomeStatus, Pause, RewardPool,
    };
    pub use tracing::{debug, error, info, trace, warn};
}
