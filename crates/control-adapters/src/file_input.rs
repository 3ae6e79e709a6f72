//! File-input confirmation adapter

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::info;

use retry_exec::{ExecError, ReliableExecutor, RetryPolicy};

use crate::report::ConfirmReport;
use crate::surface::{ControlSurface, SurfaceError};

/// Attach files to an input and confirm the attachment count matches
///
/// The action re-assigns the full path set each attempt; verification reads
/// back the attached-file count and compares it to the requested count.
pub async fn attach_files_with_confirmation(
    surface: Arc<dyn ControlSurface>,
    selector: &str,
    paths: Vec<PathBuf>,
    policy: RetryPolicy,
) -> Result<ConfirmReport, ExecError<SurfaceError>> {
    let started_at = Utc::now();
    let start = Instant::now();
    let expected = paths.len();

    let action_surface = surface.clone();
    let action_selector = selector.to_string();
    let action_paths = Arc::new(paths);
    let verify_surface = surface;
    let verify_selector = selector.to_string();

    ReliableExecutor::new(policy)
        .execute(
            move || {
                let surface = action_surface.clone();
                let selector = action_selector.clone();
                let paths = action_paths.clone();
                async move { surface.set_input_files(&selector, &paths).await }
            },
            move || {
                let surface = verify_surface.clone();
                let selector = verify_selector.clone();
                async move {
                    match surface.input_file_count(&selector).await {
                        Ok(count) => count == expected,
                        Err(_) => false,
                    }
                }
            },
        )
        .await?;

    let latency_ms = start.elapsed().as_millis() as u64;
    info!(
        selector = %selector,
        expected,
        latency_ms,
        "file attachment confirmed"
    );
    Ok(ConfirmReport::confirmed(started_at, latency_ms))
}
