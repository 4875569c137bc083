use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, instrument, warn};

use crate::metrics::{track_sessions_aggregated, track_session_dropped};
use crate::store::PortalStore;
use parentportal_core::AppError;
use parentportal_models::{RawSession, SessionCategory, SessionRecord, StudentId};

/// Label used when a session has no time slot at all.
pub const UNKNOWN_TIME: &str = "Unknown";

/// Timestamps with a UTC offset, including PostgreSQL's `timestamptz` text form (`+00`).
const ZONED_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Reads a stored schedule date. Accepts RFC 3339 and offset timestamps, ISO
/// and slash-separated dates and datetimes, US `MM/DD/YYYY` and `MM-DD-YYYY`
/// forms, compact `YYYYMMDD` and spelled-out month names with or without a
/// weekday.
pub fn parse_schedule_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date_naive())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        })
}

/// Formats a 24-hour `HH:MM:SS` time as `H:MM AM|PM`, e.g. `13:00:00` as `1:00 PM`.
pub fn format_time_label(raw: &str) -> Result<String, AppError> {
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S").map_err(|e| {
        AppError::internal(anyhow::anyhow!("Invalid time of day {:?}: {}", raw, e))
    })?;

    let label = time.format("%I:%M %p").to_string();
    Ok(label.strip_prefix('0').unwrap_or(&label).to_string())
}

/// English weekday name of `date`, e.g. `Monday`.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

fn in_month_of(date: NaiveDate, today: NaiveDate) -> bool {
    date.month() == today.month() && date.year() == today.year()
}

pub struct SessionService;

impl SessionService {
    /// Sessions of `student_id` in the current calendar month, recent first.
    ///
    /// "Current" is the local wall clock at the time of the call.
    #[instrument(skip(store))]
    pub async fn get_sessions(
        store: &dyn PortalStore,
        student_id: StudentId,
    ) -> Result<Vec<SessionRecord>, AppError> {
        let today = Local::now().date_naive();
        Self::get_sessions_as_of(store, student_id, today).await
    }

    /// Sessions of every student in `student_ids`, concatenated in list order.
    #[instrument(skip(store))]
    pub async fn get_sessions_for_students(
        store: &dyn PortalStore,
        student_ids: &[StudentId],
    ) -> Result<Vec<SessionRecord>, AppError> {
        let today = Local::now().date_naive();
        let mut all_sessions = Vec::new();
        for student_id in student_ids {
            let sessions = Self::get_sessions_as_of(store, *student_id, today).await?;
            debug!(student_id = %student_id, count = sessions.len(), "Fetched student sessions");
            all_sessions.extend(sessions);
        }
        Ok(all_sessions)
    }

    /// Same as [`SessionService::get_sessions`] with an explicit `today`.
    pub async fn get_sessions_as_of(
        store: &dyn PortalStore,
        student_id: StudentId,
        today: NaiveDate,
    ) -> Result<Vec<SessionRecord>, AppError> {
        let rows = store.sessions_for_student(student_id).await?;
        let sessions = Self::aggregate(store, rows, today).await;
        track_sessions_aggregated(sessions.len());
        Ok(sessions)
    }

    /// Shapes raw rows: keeps this month's rows, adds the time label, date and
    /// weekday, and orders recent rows before upcoming ones. Each bucket keeps
    /// retrieval order.
    pub async fn aggregate(
        store: &dyn PortalStore,
        rows: Vec<RawSession>,
        today: NaiveDate,
    ) -> Vec<SessionRecord> {
        let mut recent = Vec::new();
        let mut upcoming = Vec::new();

        for raw in rows {
            let Some(date) = raw.schedule_date.as_deref().and_then(parse_schedule_date) else {
                track_session_dropped("unparseable_date");
                continue;
            };

            if !in_month_of(date, today) {
                track_session_dropped("outside_month");
                continue;
            }

            let mut record = SessionRecord::from_raw(raw, SessionCategory::Upcoming);
            record.formatted_date = Some(date.format("%Y-%m-%d").to_string());
            if record.day.as_deref().is_none_or(|d| d.trim().is_empty()) {
                record.day = Some(weekday_name(date));
            }

            match Self::resolve_time_label(store, &record).await {
                Ok(time) => record.time = time,
                Err(e) => {
                    // The row is still shown, filed as upcoming without a time.
                    warn!(
                        student_id = %record.student_id,
                        error = %e,
                        "Failed to resolve session time, keeping session as upcoming"
                    );
                    upcoming.push(record);
                    continue;
                }
            }

            if date < today {
                record.category = SessionCategory::Recent;
                recent.push(record);
            } else {
                upcoming.push(record);
            }
        }

        recent.extend(upcoming);
        recent
    }

    async fn resolve_time_label(
        store: &dyn PortalStore,
        record: &SessionRecord,
    ) -> Result<Option<String>, AppError> {
        let Some(time_id) = record.time_id else {
            return Ok(Some(UNKNOWN_TIME.to_string()));
        };

        match store.time_for_slot(time_id).await? {
            Some(raw) => format_time_label(&raw).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use parentportal_models::TimeSlotId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(day: Option<&str>, time_id: Option<i32>, schedule_date: Option<&str>) -> RawSession {
        RawSession {
            day: day.map(str::to_string),
            time_id: time_id.map(TimeSlotId),
            schedule_date: schedule_date.map(str::to_string),
            student_id: StudentId(1),
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_time_slot(TimeSlotId(1), Some("13:00:00"))
            .with_time_slot(TimeSlotId(2), Some("09:30:00"))
            .with_time_slot(TimeSlotId(3), None)
            .with_time_slot(TimeSlotId(4), Some("not a time"))
    }

    #[test]
    fn test_format_time_label() {
        assert_eq!(format_time_label("13:00:00").unwrap(), "1:00 PM");
        assert_eq!(format_time_label("09:30:00").unwrap(), "9:30 AM");
        assert_eq!(format_time_label("00:15:00").unwrap(), "12:15 AM");
        assert_eq!(format_time_label("12:00:00").unwrap(), "12:00 PM");
        assert_eq!(format_time_label("23:45:00").unwrap(), "11:45 PM");
    }

    #[test]
    fn test_format_time_label_rejects_garbage() {
        assert!(format_time_label("1pm").is_err());
        assert!(format_time_label("").is_err());
    }

    #[test]
    fn test_parse_schedule_date_formats() {
        let expected = date(2026, 10, 5);
        for raw in [
            "2026-10-05",
            "2026-10-05 00:00:00",
            "2026-10-05 16:30:00.000",
            "2026-10-05T16:30:00",
            "2026-10-05T16:30:00Z",
            "2026-10-05T16:30:00-05:00",
            "10/05/2026",
            "10/05/2026 16:30:00",
            "October 5, 2026",
            "Oct 5, 2026",
            "  2026-10-05  ",
            "10/5/2026",
            "5 October 2026",
            "2026/10/05",
            "Oct 5 2026",
            "October 5 2026",
            "2026-10-05 16:30:00+00",
            "2026-10-05 16:30:00.123-05:00",
            "20261005",
            "Monday, October 5, 2026",
            "Mon, Oct 5, 2026",
            "2026-10-05T16:30",
            "10-05-2026",
            "10/05/2026 4:30 PM",
        ] {
            assert_eq!(parse_schedule_date(raw), Some(expected), "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_schedule_date_rejects_garbage() {
        assert_eq!(parse_schedule_date(""), None);
        assert_eq!(parse_schedule_date("   "), None);
        assert_eq!(parse_schedule_date("next tuesday"), None);
        assert_eq!(parse_schedule_date("2026-13-40"), None);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(date(2026, 10, 5)), "Monday");
        assert_eq!(weekday_name(date(2026, 10, 18)), "Sunday");
    }

    #[tokio::test]
    async fn test_excludes_sessions_outside_current_month() {
        let today = date(2026, 10, 18);
        let rows = vec![
            raw(Some("Monday"), Some(1), Some("2026-09-28")),
            raw(Some("Monday"), Some(1), Some("2026-11-02")),
            raw(Some("Monday"), Some(1), Some("2025-10-06")),
            raw(Some("Monday"), Some(1), Some("2026-10-05")),
        ];

        let sessions = SessionService::aggregate(&store(), rows, today).await;

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].formatted_date.as_deref(), Some("2026-10-05"));
    }

    #[tokio::test]
    async fn test_classifies_and_orders_recent_before_upcoming() {
        let today = date(2026, 10, 18);
        let rows = vec![
            raw(Some("Wednesday"), Some(1), Some("2026-10-21")),
            raw(Some("Monday"), Some(1), Some("2026-10-12")),
            raw(Some("Sunday"), Some(2), Some("2026-10-18")),
            raw(Some("Monday"), Some(2), Some("2026-10-05")),
        ];

        let sessions = SessionService::aggregate(&store(), rows, today).await;

        let dates: Vec<_> = sessions
            .iter()
            .map(|s| (s.formatted_date.clone().unwrap(), s.category))
            .collect();
        assert_eq!(
            dates,
            vec![
                ("2026-10-12".to_string(), SessionCategory::Recent),
                ("2026-10-05".to_string(), SessionCategory::Recent),
                ("2026-10-21".to_string(), SessionCategory::Upcoming),
                ("2026-10-18".to_string(), SessionCategory::Upcoming),
            ]
        );
    }

    #[tokio::test]
    async fn test_today_is_upcoming() {
        let today = date(2026, 10, 18);
        let sessions =
            SessionService::aggregate(&store(), vec![raw(None, Some(1), Some("2026-10-18"))], today)
                .await;
        assert_eq!(sessions[0].category, SessionCategory::Upcoming);
    }

    #[tokio::test]
    async fn test_unparseable_or_missing_dates_are_dropped() {
        let today = date(2026, 10, 18);
        let rows = vec![
            raw(Some("Monday"), Some(1), Some("someday")),
            raw(Some("Monday"), Some(1), None),
            raw(Some("Monday"), Some(1), Some("2026-10-20")),
        ];

        let sessions = SessionService::aggregate(&store(), rows, today).await;

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].schedule_date.as_deref(), Some("2026-10-20"));
    }

    #[tokio::test]
    async fn test_blank_day_gets_weekday_name() {
        let today = date(2026, 10, 18);
        let rows = vec![
            raw(None, Some(1), Some("2026-10-05")),
            raw(Some("   "), Some(1), Some("2026-10-06")),
            raw(Some("Make-up"), Some(1), Some("2026-10-07")),
        ];

        let sessions = SessionService::aggregate(&store(), rows, today).await;

        let days: Vec<_> = sessions.iter().map(|s| s.day.clone().unwrap()).collect();
        assert_eq!(days, vec!["Monday", "Tuesday", "Make-up"]);
    }

    #[tokio::test]
    async fn test_time_labels() {
        let today = date(2026, 10, 18);
        let rows = vec![
            raw(None, Some(1), Some("2026-10-19")),
            raw(None, Some(2), Some("2026-10-19")),
            raw(None, None, Some("2026-10-19")),
            raw(None, Some(3), Some("2026-10-19")),
            raw(None, Some(99), Some("2026-10-19")),
        ];

        let sessions = SessionService::aggregate(&store(), rows, today).await;

        let times: Vec<_> = sessions.iter().map(|s| s.time.clone()).collect();
        assert_eq!(
            times,
            vec![
                Some("1:00 PM".to_string()),
                Some("9:30 AM".to_string()),
                Some("Unknown".to_string()),
                None,
                None,
            ]
        );
    }

    #[tokio::test]
    async fn test_time_lookup_failure_falls_back_to_upcoming() {
        let today = date(2026, 10, 18);
        let failing = store().failing_time_slots();
        let rows = vec![
            raw(Some("Monday"), Some(1), Some("2026-10-05")),
            raw(Some("Monday"), None, Some("2026-10-12")),
        ];

        let sessions = SessionService::aggregate(&failing, rows, today).await;

        // The slotless row needs no lookup and is classified normally.
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].formatted_date.as_deref(), Some("2026-10-12"));
        assert_eq!(sessions[0].category, SessionCategory::Recent);
        assert_eq!(sessions[1].formatted_date.as_deref(), Some("2026-10-05"));
        assert_eq!(sessions[1].category, SessionCategory::Upcoming);
        assert!(sessions[1].time.is_none());
    }

    #[tokio::test]
    async fn test_time_lookup_failure_still_drops_rejected_dates() {
        let today = date(2026, 10, 18);
        let failing = store().failing_time_slots();
        let rows = vec![
            raw(Some("Monday"), Some(1), Some("2026-09-28")),
            raw(Some("Monday"), Some(1), Some("2026-11-02")),
            raw(Some("Monday"), Some(2), Some("not a date")),
            raw(Some("Monday"), Some(2), None),
        ];

        let sessions = SessionService::aggregate(&failing, rows, today).await;

        assert!(sessions.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_stored_time_falls_back_to_upcoming() {
        let today = date(2026, 10, 18);
        let sessions = SessionService::aggregate(
            &store(),
            vec![raw(None, Some(4), Some("2026-10-01"))],
            today,
        )
        .await;

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].category, SessionCategory::Upcoming);
        assert!(sessions[0].time.is_none());
    }

    #[tokio::test]
    async fn test_get_sessions_only_reads_requested_student() {
        let today = date(2026, 10, 18);
        let mut other = raw(Some("Monday"), Some(1), Some("2026-10-05"));
        other.student_id = StudentId(2);
        let store = store()
            .with_session(raw(Some("Monday"), Some(1), Some("2026-10-05")))
            .with_session(other);

        let sessions = SessionService::get_sessions_as_of(&store, StudentId(1), today)
            .await
            .unwrap();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].student_id, StudentId(1));
    }

    #[tokio::test]
    async fn test_get_sessions_propagates_store_failure() {
        let store = store().failing_sessions();
        let result = SessionService::get_sessions(&store, StudentId(1)).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_get_sessions_for_students_keeps_list_order() {
        let today = Local::now().date_naive();
        let this_month = today.format("%Y-%m-%d").to_string();
        let mut second = raw(Some("Monday"), None, Some(this_month.as_str()));
        second.student_id = StudentId(2);
        let store = store()
            .with_session(second)
            .with_session(raw(Some("Monday"), None, Some(this_month.as_str())));

        let sessions =
            SessionService::get_sessions_for_students(&store, &[StudentId(2), StudentId(1)])
                .await
                .unwrap();

        let owners: Vec<_> = sessions.iter().map(|s| s.student_id).collect();
        assert_eq!(owners, vec![StudentId(2), StudentId(1)]);
    }
}
