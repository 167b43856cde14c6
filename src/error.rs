use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while scanning a project tree.
///
/// `RootNotFound` is fatal and aborts the run. `FileRead` is recoverable:
/// the driver skips the affected file with a warning and keeps scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("project root {} does not exist or is not a directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("failed to read {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
