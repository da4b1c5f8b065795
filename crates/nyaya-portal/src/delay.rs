use std::time::Duration;

use nyaya_types::{AppError, DelaySource};

/// Real timer for the simulated actions: tokio on native targets,
/// the browser's `setTimeout` on wasm.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformDelay;

impl DelaySource for PlatformDelay {
    async fn wait(&self, duration: Duration) -> Result<(), AppError> {
        if duration.is_zero() {
            return Ok(());
        }
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;
        Ok(())
    }
}
