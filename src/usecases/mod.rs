//! Side-effect producers: call a collaborator, turn the outcome into actions.
//!
//! Nothing here returns an error to the caller. Failures, including
//! timeouts, are dispatched as the failing scope's error action.

mod auth;
mod launch;
mod profile;
mod ride;

pub use auth::AuthUseCases;
pub use launch::LaunchUseCase;
pub use profile::ProfileUseCase;
pub use ride::RideUseCases;

use std::future::Future;
use std::time::Duration;

use crate::effects::RemoteError;

/// Upper bound for one collaborator call when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Run `call`, reporting [`RemoteError::Timeout`] once `limit` elapses.
async fn within<T, F>(limit: Duration, call: F) -> Result<T, RemoteError>
where
    F: Future<Output = Result<T, RemoteError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = limit.as_millis() as u64, "Collaborator call timed out");
            Err(RemoteError::Timeout(limit))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn slow_call_becomes_timeout() {
        let slow = async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, RemoteError>(())
        };
        assert_eq!(
            within(Duration::from_secs(1), slow).await,
            Err(RemoteError::Timeout(Duration::from_secs(1)))
        );
    }

    #[tokio::test]
    async fn fast_call_passes_through() {
        let fast = async { Err::<(), _>(RemoteError::InvalidCredentials) };
        assert_eq!(
            within(Duration::from_secs(1), fast).await,
            Err(RemoteError::InvalidCredentials)
        );
    }
}
