//! Background job queue and worker.
//!
//! Jobs are enqueued onto an in-process channel, either by the cron scheduler
//! (reminders, reports) or by a request handler (exports), and drained one at
//! a time by a single worker task. A failed job is logged and the worker moves
//! on; nothing is retried automatically.

pub mod scheduler;

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    error::AppError,
    mail::Mailer,
    service::report::ReportService,
};

/// A unit of background work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    DailyReminders,
    MonthlyReports,
    ExportReservations { user_id: i32, email: String },
}

impl Job {
    fn name(&self) -> &'static str {
        match self {
            Job::DailyReminders => "daily_reminders",
            Job::MonthlyReports => "monthly_reports",
            Job::ExportReservations { .. } => "export_reservations",
        }
    }
}

/// Handle for enqueueing background jobs.
///
/// Cheap to clone; every clone feeds the same worker.
#[derive(Clone)]
pub struct JobQueue {
    tx: mpsc::UnboundedSender<Job>,
}

impl JobQueue {
    /// Enqueues a job for the worker.
    ///
    /// # Returns
    /// - `Err(AppError::InternalError)` - The worker has shut down
    pub fn enqueue(&self, job: Job) -> Result<(), AppError> {
        self.tx
            .send(job)
            .map_err(|_| AppError::InternalError("Job worker is not running".to_string()))
    }
}

/// Spawns the job worker and returns the queue handle plus a token that stops
/// the worker when cancelled.
pub fn start_worker(
    db: DatabaseConnection,
    mailer: Arc<dyn Mailer>,
) -> (JobQueue, CancellationToken) {
    let (tx, mut rx) = mpsc::unbounded_channel::<Job>();
    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            tracing::info!("Job worker started");
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::info!("Job worker stopped");
                        break;
                    }
                    job = rx.recv() => {
                        let Some(job) = job else {
                            tracing::info!("Job queue closed, worker stopping");
                            break;
                        };

                        let name = job.name();
                        if let Err(err) = run_job(&db, mailer.as_ref(), job).await {
                            tracing::error!("Job {} failed: {}", name, err);
                        }
                    }
                }
            }
        });
    }

    (JobQueue { tx }, cancel)
}

async fn run_job(
    db: &DatabaseConnection,
    mailer: &dyn Mailer,
    job: Job,
) -> Result<(), AppError> {
    let reports = ReportService::new(db, mailer);

    match job {
        Job::DailyReminders => {
            let sent = reports.daily_reminders().await?;
            tracing::info!("Sent {} daily reminders", sent);
        }
        Job::MonthlyReports => {
            let sent = reports.monthly_reports().await?;
            tracing::info!("Sent {} monthly reports", sent);
        }
        Job::ExportReservations { user_id, email } => {
            let outcome = reports.export_reservations(user_id, &email).await?;
            tracing::info!(
                "Export for user {} finished with outcome {:?}",
                user_id,
                outcome
            );
        }
    }

    Ok(())
}
