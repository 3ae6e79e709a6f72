//! UI surface seam consumed by the adapters

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`ControlSurface`] driver
#[derive(Debug, Error, Clone)]
pub enum SurfaceError {
    /// The addressed control does not exist on the page
    #[error("Control not found: {0}")]
    NotFound(String),

    /// Underlying driver or protocol failure
    #[error("Driver error: {0}")]
    Driver(String),
}

/// Minimal UI-action surface the adapters drive
///
/// Implementations wrap whatever automation backend the test suite uses.
/// The adapters only need a perform call and a state read-back per control;
/// read-backs must be safe to call repeatedly.
#[async_trait]
pub trait ControlSurface: Send + Sync {
    /// Set the checked state of a checkbox-like control
    async fn set_checked(&self, selector: &str, checked: bool) -> Result<(), SurfaceError>;

    /// Read back the checked state of the control
    async fn is_checked(&self, selector: &str) -> Result<bool, SurfaceError>;

    /// Assign the given file paths to a file input
    async fn set_input_files(&self, selector: &str, paths: &[PathBuf]) -> Result<(), SurfaceError>;

    /// Number of files currently attached to the input
    async fn input_file_count(&self, selector: &str) -> Result<usize, SurfaceError>;
}
