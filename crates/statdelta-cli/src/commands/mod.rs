pub mod diff;
pub mod report;

use std::path::Path;

use statdelta_core::errors::{ExError, ExErrorKind};

/// Read a whole input file, classifying failures as IO errors of `op`.
pub fn read_input(op: &str, path: &Path) -> Result<Vec<u8>, ExError> {
    std::fs::read(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op(op)
            .with_message(format!("{}: {}", path.display(), e))
    })
}

/// The classified error behind a command failure.
///
/// Failures that never passed through [`ExError`] are input problems.
pub fn classify(op: &str, err: &anyhow::Error) -> ExError {
    err.downcast_ref::<ExError>().cloned().unwrap_or_else(|| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op(op)
            .with_message(format!("{:#}", err))
    })
}
