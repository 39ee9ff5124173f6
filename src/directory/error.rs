use thiserror::Error;

/// Failures surfaced by directory operations.
///
/// The display strings are the human-readable `detail` returned to HTTP clients.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student already signed up for this activity")]
    AlreadySignedUp,
    #[error("Activity has reached its maximum capacity")]
    AtCapacity,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DirectoryError {
    /// True for rejections caused by the caller's input rather than the backing store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DirectoryError::Storage(_))
    }
}
