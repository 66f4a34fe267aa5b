use crate::format::PackedVersion;

/// Errors that can occur while reading, writing, or upgrading world files.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("truncated world data: expected {expected} bytes, got {actual}")]
    Truncated { expected: u64, actual: u64 },

    #[error("file version {found} is newer than application version {current}")]
    IncompatibleVersion {
        found: PackedVersion,
        current: PackedVersion,
    },
}
