use tokio_cron_scheduler::{Job as CronJob, JobScheduler};

use crate::{
    error::AppError,
    jobs::{Job, JobQueue},
};

/// Starts the cron scheduler feeding the job queue.
///
/// Two schedules are registered:
/// - daily reminders at 18:00
/// - monthly reports at 09:00 on the 1st
///
/// The scheduler only enqueues; the job worker does the actual work, so a
/// slow batch never delays the next cron tick.
pub async fn start_scheduler(queue: JobQueue) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let reminder_queue = queue.clone();
    let reminder_job = CronJob::new_async("0 0 18 * * *", move |_uuid, _lock| {
        let queue = reminder_queue.clone();
        Box::pin(async move {
            if let Err(e) = queue.enqueue(Job::DailyReminders) {
                tracing::error!("Failed to enqueue daily reminders: {}", e);
            }
        })
    })?;
    scheduler.add(reminder_job).await?;

    let report_queue = queue.clone();
    let report_job = CronJob::new_async("0 0 9 1 * *", move |_uuid, _lock| {
        let queue = report_queue.clone();
        Box::pin(async move {
            if let Err(e) = queue.enqueue(Job::MonthlyReports) {
                tracing::error!("Failed to enqueue monthly reports: {}", e);
            }
        })
    })?;
    scheduler.add(report_job).await?;

    scheduler.start().await?;

    tracing::info!("Job scheduler started");

    Ok(scheduler)
}
