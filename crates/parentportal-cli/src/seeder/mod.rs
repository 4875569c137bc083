//! Fake tutoring-center data for local development.
//!
//! Seeded parents all have `@example.com` addresses and contact numbers
//! `555-0000`, `555-0001`, ... so a developer can log in to the portal as
//! any of them. [`clear_all`] removes exactly those parents and everything
//! hanging off them.

pub mod families;
pub mod models;
pub mod sessions;

use std::time::Instant;

use sqlx::PgPool;

pub use models::SeedConfig;

use models::{SessionRow, StudentRow};

/// Seeds families, students, schedules, purchases and attendance in one transaction.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding {} families ({} students, {} sessions)...",
        config.families,
        config.total_students(),
        config.total_sessions()
    );

    let slots = sessions::ensure_time_slots(db).await?;
    let families = families::generate_families(&config, slots.len());

    let mut tx = db.begin().await?;

    let inquiry_ids = families::insert_families(&mut tx, &families).await?;
    println!("   ✓ Inserted {} parents", inquiry_ids.len());

    let student_rows: Vec<StudentRow> = inquiry_ids
        .iter()
        .zip(&families)
        .flat_map(|(&inquiry_id, family)| {
            family
                .students
                .iter()
                .map(move |seed| StudentRow { inquiry_id, seed })
        })
        .collect();
    let student_ids = families::insert_students(&mut tx, &student_rows).await?;
    println!("   ✓ Inserted {} students", student_ids.len());

    let session_rows: Vec<SessionRow> = student_ids
        .iter()
        .zip(&student_rows)
        .flat_map(|(&student_id, row)| {
            row.seed
                .sessions
                .iter()
                .map(move |seed| SessionRow { student_id, seed })
        })
        .collect();
    sessions::insert_sessions(&mut tx, &session_rows, &slots).await?;
    println!("   ✓ Inserted {} sessions", session_rows.len());

    tx.commit().await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    if let Some(family) = families.first() {
        println!(
            "   Log in with contact number {} ({})",
            family.contact_phone, family.email
        );
    }
    Ok(())
}

/// Removes every seeded parent. Time slots are left in place.
pub async fn clear_all(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded families...");

    let deleted = families::clear_families(db).await?;

    println!(
        "   ✓ Deleted {} parents in {:?}",
        deleted,
        start_time.elapsed()
    );
    Ok(deleted)
}
