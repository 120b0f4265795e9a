use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cell index {index} is out of range for a board of {len} cells")]
    OutOfRange { index: usize, len: usize },
    #[error("Persisted board could not be read: {0}")]
    CorruptState(String),
    #[error("Board storage failed: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, BoardError>;
