use std::path::PathBuf;

use crate::error::ConfigError;
use crate::loader::DEFAULT_BLOCK_SIZE;

/// Settings for one viewer session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// File to display.
    pub path: Option<PathBuf>,
    /// Bytes read per chunk when loading the file.
    pub block_size: usize,
    /// First line shown on screen.
    pub start_line: usize,
    /// Where tracing output goes while the alternate screen is active.
    pub log_file: Option<PathBuf>,
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            path: None,
            block_size: DEFAULT_BLOCK_SIZE,
            start_line: 0,
            log_file: None,
        }
    }
}
