//! Control Confirmation Adapters
//!
//! Thin adapters that perform a UI control action and confirm its effect
//! through the reliable executor: driving checkboxes to a requested state
//! and attaching files to file inputs over an injected [`ControlSurface`].
//! All timing and retry behavior is delegated to `retry-exec`.

pub mod checkbox;
pub mod file_input;
pub mod report;
pub mod surface;

pub use checkbox::set_checked_with_confirmation;
pub use file_input::attach_files_with_confirmation;
pub use report::ConfirmReport;
pub use surface::{ControlSurface, SurfaceError};
