use fridgekit_shared::{State, Store};
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

/// Builds a scheduler running the expiry purge on `cron`.
///
/// The purge honours the auto-delete setting; failures are logged and the
/// job keeps its schedule. The caller starts and shuts down the scheduler.
pub async fn purge_scheduler<S: Store + Clone + 'static>(
    state: State<S>,
    cron: &str,
) -> Result<JobScheduler, JobSchedulerError> {
    let sched = JobScheduler::new().await?;

    sched
        .add(Job::new_async(cron, move |uuid, mut l| {
            let state = state.clone();

            Box::pin(async move {
                match run_purge(state).await {
                    Ok(removed) => tracing::debug!(removed, "scheduled inventory purge done"),
                    Err(err) => tracing::error!(err = %err, "failed to purge expired inventory"),
                }

                if let Err(err) = l.next_tick_for_job(uuid).await {
                    tracing::error!(err = %err, "failed to get next tick for inventory purge");
                }
            })
        })?)
        .await?;

    Ok(sched)
}

pub async fn run_purge<S: Store>(state: State<S>) -> fridgekit_shared::Result<usize> {
    fridgekit_inventory::Command::new(state)
        .purge_expired_if_enabled()
        .await
}
