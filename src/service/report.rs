//! Notification and export jobs: daily reminders, monthly activity reports,
//! and user-triggered CSV exports.
//!
//! Everything here runs from the background worker rather than a request
//! handler. Per-recipient failures are logged and skipped so one bad address
//! never blocks the rest of a batch.

use std::collections::HashMap;
use std::io::Write;

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use tempfile::NamedTempFile;

use crate::{
    data::{
        lot::LotRepository, reservation::ReservationRepository, spot::SpotRepository,
        user::UserRepository,
    },
    error::AppError,
    mail::{MailAttachment, Mailer, OutgoingEmail},
    model::{reservation::Reservation, user::Role},
};

/// Result of an export job run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// CSV attachment was produced and mailed.
    Sent,
    /// The account had no reservations; a notice was mailed instead.
    NoData,
}

/// Aggregated activity for one account over one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyActivity {
    pub reservation_count: usize,
    pub total_spent: f64,
    /// Name and usage count of the most used lot, if any reservation could be
    /// traced back to a lot.
    pub top_lot: Option<(String, u64)>,
}

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
    mailer: &'a dyn Mailer,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection, mailer: &'a dyn Mailer) -> Self {
        Self { db, mailer }
    }

    /// Sends a reminder to every user who has not booked a spot today.
    ///
    /// "Today" starts at UTC midnight. Send failures are logged per recipient
    /// and do not stop the batch.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reminders actually sent
    pub async fn daily_reminders(&self) -> Result<u64, AppError> {
        let users = UserRepository::new(self.db)
            .get_all_with_role(Role::User)
            .await?;
        let reservation_repo = ReservationRepository::new(self.db);

        let since = utc_midnight(Utc::now().date_naive());
        let mut sent = 0;

        for user in users {
            let bookings_today = reservation_repo
                .count_for_user_since(user.id, since)
                .await?;
            if bookings_today > 0 {
                continue;
            }

            let email = OutgoingEmail::plain(
                user.email.clone(),
                "Parking Reminder",
                "You have not booked a parking spot today. Please check if you need to park.",
            );
            match self.mailer.send(email).await {
                Ok(()) => sent += 1,
                Err(err) => {
                    tracing::warn!("Failed to send reminder to {}: {}", user.email, err);
                }
            }
        }

        Ok(sent)
    }

    /// Sends each user a report of their activity in the prior calendar month.
    ///
    /// Send failures are logged per recipient and do not stop the batch.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reports actually sent
    pub async fn monthly_reports(&self) -> Result<u64, AppError> {
        let users = UserRepository::new(self.db)
            .get_all_with_role(Role::User)
            .await?;
        let reservation_repo = ReservationRepository::new(self.db);

        let (start, end) = prior_month_window(Utc::now().date_naive());
        let lot_names: HashMap<i32, String> = LotRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|lot| (lot.id, lot.name))
            .collect();

        let mut sent = 0;

        for user in users {
            let reservations = reservation_repo
                .get_for_user_between(user.id, start, end)
                .await?;

            let lot_by_spot = self.resolve_lots_of_spots(&reservations).await?;
            let activity = summarize(&reservations, &lot_by_spot, &lot_names);
            let html = render_monthly_report(&activity);

            let email = OutgoingEmail::html(user.email.clone(), "Monthly Parking Report", html);
            match self.mailer.send(email).await {
                Ok(()) => sent += 1,
                Err(err) => {
                    tracing::warn!("Failed to send monthly report to {}: {}", user.email, err);
                }
            }
        }

        Ok(sent)
    }

    /// Exports an account's full reservation history as a CSV attachment.
    ///
    /// With no reservations, a "no data" notice is mailed instead of an
    /// attachment. On any error a best-effort failure notification goes out
    /// before the error is propagated to the job worker. The CSV is staged in
    /// a temp file that is removed when the job finishes either way.
    ///
    /// # Arguments
    /// - `user_id` - Account whose reservations to export
    /// - `email` - Destination address, captured when the job was enqueued
    pub async fn export_reservations(
        &self,
        user_id: i32,
        email: &str,
    ) -> Result<ExportOutcome, AppError> {
        match self.try_export(user_id, email).await {
            Ok(outcome) => Ok(outcome),
            Err(err) => {
                let notice = OutgoingEmail::plain(
                    email.to_string(),
                    "Parking Export Failed",
                    format!("An error occurred: {}", err),
                );
                if let Err(mail_err) = self.mailer.send(notice).await {
                    tracing::warn!(
                        "Failed to send export failure notice to {}: {}",
                        email,
                        mail_err
                    );
                }
                Err(err)
            }
        }
    }

    async fn try_export(&self, user_id: i32, email: &str) -> Result<ExportOutcome, AppError> {
        let reservations = ReservationRepository::new(self.db)
            .get_by_user_desc(user_id)
            .await?;

        if reservations.is_empty() {
            let notice = OutgoingEmail::plain(
                email.to_string(),
                "Your Parking Export",
                "No reservations found for your account.",
            );
            self.mailer.send(notice).await?;
            return Ok(ExportOutcome::NoData);
        }

        let mut tmp = NamedTempFile::new()?;
        write_reservations_csv(&mut tmp, &reservations)?;
        let bytes = std::fs::read(tmp.path())?;

        let message = OutgoingEmail::plain(
            email.to_string(),
            "Your Parking Reservation Export",
            "Please find your parking reservation details attached as CSV.",
        )
        .with_attachment(MailAttachment {
            filename: format!("user_{}_reservations.csv", user_id),
            content_type: "text/csv".to_string(),
            bytes,
        });
        self.mailer.send(message).await?;

        Ok(ExportOutcome::Sent)
    }

    /// Maps the spot IDs referenced by the reservations to their lot IDs.
    ///
    /// Reservations whose spot row was removed by a lot resize have no spot
    /// link and are left out of the map.
    async fn resolve_lots_of_spots(
        &self,
        reservations: &[Reservation],
    ) -> Result<HashMap<i32, i32>, AppError> {
        let spot_ids: Vec<i32> = reservations.iter().filter_map(|r| r.spot_id).collect();

        let spots = SpotRepository::new(self.db).get_by_ids(&spot_ids).await?;

        Ok(spots.into_iter().map(|s| (s.id, s.lot_id)).collect())
    }
}

/// Aggregates one account's reservations for the monthly report.
///
/// # Arguments
/// - `reservations` - The account's reservations inside the report window
/// - `lot_by_spot` - Spot ID to lot ID mapping for the referenced spots
/// - `lot_names` - Lot ID to lot name mapping
pub fn summarize(
    reservations: &[Reservation],
    lot_by_spot: &HashMap<i32, i32>,
    lot_names: &HashMap<i32, String>,
) -> MonthlyActivity {
    let mut usage: HashMap<i32, u64> = HashMap::new();
    for reservation in reservations {
        if let Some(lot_id) = reservation.spot_id.and_then(|s| lot_by_spot.get(&s)) {
            *usage.entry(*lot_id).or_insert(0) += 1;
        }
    }

    let top_lot = usage.into_iter().max_by_key(|(_, count)| *count).map(
        |(lot_id, count)| {
            let name = lot_names
                .get(&lot_id)
                .cloned()
                .unwrap_or_else(|| format!("Lot {}", lot_id));
            (name, count)
        },
    );

    MonthlyActivity {
        reservation_count: reservations.len(),
        total_spent: reservations.iter().map(|r| r.parking_cost).sum(),
        top_lot,
    }
}

/// Renders the monthly report email body as HTML.
pub fn render_monthly_report(activity: &MonthlyActivity) -> String {
    let (lot_name, lot_count) = match &activity.top_lot {
        Some((name, count)) => (name.as_str(), *count),
        None => ("N/A", 0),
    };

    format!(
        "<h2>Your Monthly Parking Report</h2>\n\
         <ul>\n\
           <li><strong>Total Reservations:</strong> {}</li>\n\
           <li><strong>Most Used Lot:</strong> {} ({} times)</li>\n\
           <li><strong>Total Spent:</strong> \u{20b9}{:.2}</li>\n\
         </ul>",
        activity.reservation_count, lot_name, lot_count, activity.total_spent
    )
}

/// Writes the reservations to `out` as CSV with a header row.
fn write_reservations_csv<W: Write>(out: W, reservations: &[Reservation]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record([
        "id",
        "spot_id",
        "user_id",
        "parking_timestamp",
        "leaving_timestamp",
        "parking_cost",
        "vehicle_number",
        "remarks",
    ])?;

    for r in reservations {
        writer.write_record([
            r.id.to_string(),
            r.spot_id.map(|s| s.to_string()).unwrap_or_default(),
            r.user_id.to_string(),
            r.parking_timestamp.to_rfc3339(),
            r.leaving_timestamp
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            r.parking_cost.to_string(),
            r.vehicle_number.clone().unwrap_or_default(),
            r.remarks.clone().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// UTC midnight at the start of the given date.
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Half-open UTC window `[start, end)` covering the calendar month before the
/// one containing `today`.
pub fn prior_month_window(today: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let first_of_this =
        NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today);
    let first_of_prior = first_of_this
        .checked_sub_months(Months::new(1))
        .unwrap_or(first_of_this);

    (utc_midnight(first_of_prior), utc_midnight(first_of_this))
}
