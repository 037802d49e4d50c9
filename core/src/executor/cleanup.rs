use std::future::Future;

use crate::error::SuiteError;

/// Runs `body`, then always runs `cleanup`.
///
/// The body's failure is never replaced: if both fail, the cleanup error is
/// only logged and the body's error is returned. A cleanup failure after a
/// successful body is returned as is.
pub async fn run_with_cleanup<T, B, C>(body: B, cleanup: C) -> Result<T, SuiteError>
where
    B: Future<Output = Result<T, SuiteError>>,
    C: Future<Output = Result<(), SuiteError>>,
{
    let outcome = body.await;
    let cleaned = cleanup.await;

    match (outcome, cleaned) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(cleanup_err)) => {
            tracing::warn!(
                error = %cleanup_err,
                "cleanup failed after an earlier failure; reporting the earlier one"
            );
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[tokio::test]
    async fn cleanup_runs_and_body_error_wins() {
        let cleaned = AtomicBool::new(false);
        let res: Result<(), _> = run_with_cleanup(
            async { Err(SuiteError::usage("script failed")) },
            async {
                cleaned.store(true, Ordering::SeqCst);
                Err(SuiteError::configuration("copy failed"))
            },
        )
        .await;

        assert!(cleaned.load(Ordering::SeqCst));
        assert_eq!(res.unwrap_err().to_string(), "script failed");
    }

    #[tokio::test]
    async fn cleanup_error_surfaces_when_body_succeeds() {
        let res = run_with_cleanup(async { Ok(7) }, async {
            Err(SuiteError::configuration("copy failed"))
        })
        .await;

        assert_eq!(res.unwrap_err().kind(), "ConfigurationError");
    }

    #[tokio::test]
    async fn value_passes_through() {
        let res = run_with_cleanup(async { Ok("done") }, async { Ok(()) }).await;
        assert_eq!(res.unwrap(), "done");
    }
}
