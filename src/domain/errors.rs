use super::models::ReservationId;
use thiserror::Error;

/// Failures raised by a [`SlotStorage`](super::SlotStorage) backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    /// There is no persistence medium at all in this environment.
    #[error("storage is unavailable")]
    Unavailable,
    /// The medium exists but a read or write failed.
    #[error("storage I/O failed: {0}")]
    Io(String),
    /// The slot exists but its bytes cannot be decoded as text.
    #[error("stored data is unreadable: {0}")]
    Corrupt(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Reservation not found: {0}")]
    NotFound(ReservationId),
    #[error("Reservation storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("Reservation data is corrupt: {0}")]
    CorruptData(String),
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Corrupt(reason) => StoreError::CorruptData(reason),
            other => StoreError::StorageUnavailable(other.to_string()),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
