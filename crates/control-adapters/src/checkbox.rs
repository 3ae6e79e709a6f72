//! Checkbox confirmation adapter

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::info;

use retry_exec::{ExecError, ReliableExecutor, RetryPolicy};

use crate::report::ConfirmReport;
use crate::surface::{ControlSurface, SurfaceError};

/// Drive a checkbox to the requested state and confirm it stuck
///
/// The action toggles the control; verification reads the state back and
/// compares. A failed read-back counts as "not yet observable", never as an
/// action failure.
pub async fn set_checked_with_confirmation(
    surface: Arc<dyn ControlSurface>,
    selector: &str,
    checked: bool,
    policy: RetryPolicy,
) -> Result<ConfirmReport, ExecError<SurfaceError>> {
    let started_at = Utc::now();
    let start = Instant::now();

    let action_surface = surface.clone();
    let action_selector = selector.to_string();
    let verify_surface = surface;
    let verify_selector = selector.to_string();

    ReliableExecutor::new(policy)
        .execute(
            move || {
                let surface = action_surface.clone();
                let selector = action_selector.clone();
                async move { surface.set_checked(&selector, checked).await }
            },
            move || {
                let surface = verify_surface.clone();
                let selector = verify_selector.clone();
                async move {
                    match surface.is_checked(&selector).await {
                        Ok(state) => state == checked,
                        Err(_) => false,
                    }
                }
            },
        )
        .await?;

    let latency_ms = start.elapsed().as_millis() as u64;
    info!(
        selector = %selector,
        checked,
        latency_ms,
        "checkbox state confirmed"
    );
    Ok(ConfirmReport::confirmed(started_at, latency_ms))
}
