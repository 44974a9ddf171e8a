/**
 * Periodic Accrual Job
 *
 * On a fixed wall-clock schedule, every user record gains one accrual
 * point. The job runs independently of the request-handling and broadcast
 * paths: each cycle reads the full user set, increments each counter in
 * memory, and persists one record at a time.
 *
 * # Failure Semantics
 *
 * No transaction spans a cycle. A failure persisting one user is logged
 * and skipped; users already updated in that cycle keep their new value,
 * and the cycle continues with the remaining users.
 */

use sqlx::PgPool;
use std::time::Duration;

use crate::backend::auth::users::{list_users, set_user_point, User};
use crate::backend::error::BackendError;

/// Default accrual period (23 hours, matching the production schedule)
pub const DEFAULT_ACCRUAL_INTERVAL_SECS: u64 = 23 * 60 * 60;

/// Outcome of one accrual cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualSummary {
    /// Users whose point counter was persisted
    pub updated: usize,
    /// Users skipped because persisting failed
    pub failed: usize,
}

/// Run one accrual cycle: read all users, grant each one point
///
/// The returned error covers only the initial user-set read; per-user
/// persistence failures are tallied in the summary instead.
pub async fn accrue_points(pool: &PgPool) -> Result<AccrualSummary, BackendError> {
    let users = list_users(pool).await?;
    Ok(persist_points(pool, users).await)
}

/// Persist an incremented point counter for each of the given users
///
/// Building block of [`accrue_points`], separated so failure isolation can
/// be exercised with a caller-supplied user set.
pub async fn persist_points(pool: &PgPool, users: Vec<User>) -> AccrualSummary {
    let mut summary = AccrualSummary {
        updated: 0,
        failed: 0,
    };

    for user in users {
        let next_point = user.point + 1;
        match set_user_point(pool, user.id, next_point).await {
            Ok(()) => {
                summary.updated += 1;
            }
            Err(e) => {
                tracing::warn!(
                    "[Accrual] Failed to persist points for user {}: {:?}",
                    user.id,
                    e
                );
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Run the accrual job on a fixed schedule until the process shuts down
///
/// Fires at least once per configured period. A cycle that fails outright
/// (user-set read error) is logged and retried at the next tick.
pub async fn run_accrual_job(pool: PgPool, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // The first tick completes immediately; consume it so the first cycle
    // runs one full period after startup
    interval.tick().await;

    loop {
        interval.tick().await;
        match accrue_points(&pool).await {
            Ok(summary) => {
                tracing::info!(
                    "[Accrual] Cycle complete: {} users updated, {} failed",
                    summary.updated,
                    summary.failed
                );
            }
            Err(e) => {
                tracing::error!("[Accrual] Cycle failed: {}", e);
            }
        }
    }
}
