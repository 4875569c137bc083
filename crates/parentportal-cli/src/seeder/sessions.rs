//! Time slots, scheduled sessions and attendance.

use chrono::NaiveTime;
use parentportal_models::TimeSlotId;
use sqlx::{PgPool, Postgres, Transaction};

use super::models::SessionRow;

/// Afternoon slots, every half hour from 3:00 PM to 7:00 PM.
pub fn default_slot_times() -> Vec<NaiveTime> {
    (0..9)
        .filter_map(|i| NaiveTime::from_hms_opt(15 + i / 2, (i % 2) * 30, 0))
        .collect()
}

/// Returns the center's time slots, creating the default set when there are none.
pub async fn ensure_time_slots(db: &PgPool) -> Result<Vec<TimeSlotId>, Box<dyn std::error::Error>> {
    let existing: Vec<TimeSlotId> =
        sqlx::query_scalar("SELECT id FROM time_slots ORDER BY slot_time NULLS LAST, id")
            .fetch_all(db)
            .await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    let times = default_slot_times();
    let mut query = String::from("INSERT INTO time_slots (slot_time) VALUES ");
    for i in 0..times.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${})", i + 1));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, TimeSlotId>(&query);
    for time in &times {
        q = q.bind(time);
    }

    let ids = q.fetch_all(db).await?;
    println!("   ✓ Created {} time slots", ids.len());
    Ok(ids)
}

/// Inserts schedule rows and, for past sessions, one hour of attendance each.
pub async fn insert_sessions(
    tx: &mut Transaction<'_, Postgres>,
    sessions: &[SessionRow<'_>],
    slots: &[TimeSlotId],
) -> Result<(), Box<dyn std::error::Error>> {
    // 4 params per session
    const BATCH_SIZE: usize = 2000;

    for chunk in sessions.chunks(BATCH_SIZE) {
        insert_schedule_chunk(tx, chunk, slots).await?;
        insert_attendance_chunk(tx, chunk).await?;
    }
    Ok(())
}

async fn insert_schedule_chunk(
    tx: &mut Transaction<'_, Postgres>,
    sessions: &[SessionRow<'_>],
    slots: &[TimeSlotId],
) -> Result<(), Box<dyn std::error::Error>> {
    if sessions.is_empty() {
        return Ok(());
    }

    let mut query =
        String::from("INSERT INTO session_schedule (student_id, day, time_id, schedule_date) VALUES ");
    for i in 0..sessions.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 4;
        query.push_str(&format!("(${}, ${}, ${}, ${})", p + 1, p + 2, p + 3, p + 4));
    }

    let mut q = sqlx::query(&query);
    for session in sessions {
        let time_id = session.seed.slot.and_then(|i| slots.get(i).copied());
        q = q
            .bind(session.student_id)
            .bind(session.seed.date.format("%A").to_string())
            .bind(time_id)
            .bind(session.seed.date.format("%Y-%m-%d").to_string());
    }

    q.execute(&mut **tx).await?;
    Ok(())
}

async fn insert_attendance_chunk(
    tx: &mut Transaction<'_, Postgres>,
    sessions: &[SessionRow<'_>],
) -> Result<(), Box<dyn std::error::Error>> {
    let attended: Vec<_> = sessions
        .iter()
        .filter_map(|s| s.seed.attendance.map(|status| (s, status)))
        .collect();
    if attended.is_empty() {
        return Ok(());
    }

    let mut query =
        String::from("INSERT INTO attendance (student_id, attended_on, hours, status) VALUES ");
    for i in 0..attended.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 3;
        query.push_str(&format!("(${}, ${}, 1.0, ${})", p + 1, p + 2, p + 3));
    }

    let mut q = sqlx::query(&query);
    for (session, status) in attended {
        q = q
            .bind(session.student_id)
            .bind(session.seed.date)
            .bind(status);
    }

    q.execute(&mut **tx).await?;
    Ok(())
}
