use std::collections::TryReserveError;
use thiserror::Error;

/// Recoverable failures of buffer mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("failed to allocate storage for {requested} more elements")]
    AllocationFailure {
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

impl BufferError {
    pub(crate) fn allocation(requested: usize, source: TryReserveError) -> Self {
        Self::AllocationFailure { requested, source }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read block size must be greater than zero")]
    InvalidBlockSize,

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("block size must be greater than zero")]
    ZeroBlockSize,
}
