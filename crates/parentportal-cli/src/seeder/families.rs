//! Parent (inquiry) and student seeding.

use chrono::{Duration, Local};
use fake::Fake;
use fake::faker::name::en::*;
use parentportal_models::{InquiryId, StudentId};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};

use super::models::{
    FamilySeed, SEED_EMAIL_DOMAIN, SeedConfig, SessionSeed, StudentRow, StudentSeed,
};

const PURCHASE_SIZES: [f64; 3] = [10.0, 20.0, 40.0];
const RATE_PER_HOUR: f64 = 30.0;
const ATTENDANCE: [&str; 5] = ["present", "present", "present", "excused", "unexcused"];

/// Contact number of the `index`-th seeded family. Stable so testers can log in.
pub fn seed_phone(index: usize) -> String {
    format!("555-{:04}", index)
}

/// Generates families, their students and their schedules in parallel.
pub fn generate_families(config: &SeedConfig, slot_count: usize) -> Vec<FamilySeed> {
    let today = Local::now().date_naive();

    (0..config.families)
        .into_par_iter()
        .map(|family_idx| {
            let last_name: String = LastName().fake();
            let parent_first: String = FirstName().fake();

            let students = (0..config.students_per_family)
                .map(|_| StudentSeed {
                    first_name: FirstName().fake(),
                    last_name: last_name.clone(),
                    sessions: (0..config.sessions_per_student)
                        .map(|_| {
                            let offset: i64 = (-config.window_days..=config.window_days).fake();
                            let date = today + Duration::days(offset);
                            SessionSeed {
                                date,
                                slot: (slot_count > 0).then(|| (0..slot_count).fake::<usize>()),
                                attendance: (date < today)
                                    .then(|| ATTENDANCE[(0..ATTENDANCE.len()).fake::<usize>()]),
                            }
                        })
                        .collect(),
                })
                .collect();

            FamilySeed {
                email: format!(
                    "{}.{}+parent{}@{}",
                    parent_first.to_lowercase(),
                    last_name.to_lowercase(),
                    family_idx,
                    SEED_EMAIL_DOMAIN
                ),
                contact_phone: seed_phone(family_idx),
                purchased_hours: PURCHASE_SIZES[(0..PURCHASE_SIZES.len()).fake::<usize>()],
                students,
            }
        })
        .collect()
}

/// Inserts parents, one hour purchase each, returning inquiry ids in input order.
pub async fn insert_families(
    tx: &mut Transaction<'_, Postgres>,
    families: &[FamilySeed],
) -> Result<Vec<InquiryId>, Box<dyn std::error::Error>> {
    // 2 params per family
    const BATCH_SIZE: usize = 1000;

    let mut all_ids = Vec::with_capacity(families.len());
    for chunk in families.chunks(BATCH_SIZE) {
        let ids = insert_inquiries_chunk(tx, chunk).await?;
        insert_purchases_chunk(tx, &ids, chunk).await?;
        all_ids.extend(ids);
    }
    Ok(all_ids)
}

async fn insert_inquiries_chunk(
    tx: &mut Transaction<'_, Postgres>,
    families: &[FamilySeed],
) -> Result<Vec<InquiryId>, Box<dyn std::error::Error>> {
    if families.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO inquiries (email, contact_phone) VALUES ");
    for i in 0..families.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${}, ${})", i * 2 + 1, i * 2 + 2));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, InquiryId>(&query);
    for family in families {
        q = q.bind(&family.email).bind(&family.contact_phone);
    }

    Ok(q.fetch_all(&mut **tx).await?)
}

async fn insert_purchases_chunk(
    tx: &mut Transaction<'_, Postgres>,
    inquiry_ids: &[InquiryId],
    families: &[FamilySeed],
) -> Result<(), Box<dyn std::error::Error>> {
    if families.is_empty() {
        return Ok(());
    }

    let mut query = String::from("INSERT INTO hour_purchases (inquiry_id, hours, amount) VALUES ");
    for i in 0..families.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str(&format!("(${}, ${}, ${})", i * 3 + 1, i * 3 + 2, i * 3 + 3));
    }

    let mut q = sqlx::query(&query);
    for (inquiry_id, family) in inquiry_ids.iter().zip(families) {
        q = q
            .bind(inquiry_id)
            .bind(family.purchased_hours)
            .bind(family.purchased_hours * RATE_PER_HOUR);
    }

    q.execute(&mut **tx).await?;
    Ok(())
}

/// Inserts students, returning their ids in input order.
pub async fn insert_students(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentRow<'_>],
) -> Result<Vec<StudentId>, Box<dyn std::error::Error>> {
    // 3 params per student
    const BATCH_SIZE: usize = 1000;

    let mut all_ids = Vec::with_capacity(students.len());
    for chunk in students.chunks(BATCH_SIZE) {
        if chunk.is_empty() {
            continue;
        }

        let mut query =
            String::from("INSERT INTO students (inquiry_id, first_name, last_name) VALUES ");
        for i in 0..chunk.len() {
            if i > 0 {
                query.push_str(", ");
            }
            query.push_str(&format!("(${}, ${}, ${})", i * 3 + 1, i * 3 + 2, i * 3 + 3));
        }
        query.push_str(" RETURNING id");

        let mut q = sqlx::query_scalar::<_, StudentId>(&query);
        for student in chunk {
            q = q
                .bind(student.inquiry_id)
                .bind(&student.seed.first_name)
                .bind(&student.seed.last_name);
        }

        let ids = q.fetch_all(&mut **tx).await?;
        all_ids.extend(ids);
    }
    Ok(all_ids)
}

/// Deletes seeded parents. Students, schedules, purchases and attendance cascade.
pub async fn clear_families(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let deleted = sqlx::query("DELETE FROM inquiries WHERE email LIKE $1")
        .bind(format!("%@{}", SEED_EMAIL_DOMAIN))
        .execute(db)
        .await?
        .rows_affected();
    Ok(deleted)
}
