//! Runs against PostgreSQL: `DATABASE_URL=... cargo test -- --ignored`.

use parentportal::parentportal_models::InquiryId;
use parentportal::store::{BalanceSource, PgPortalStore, PortalStore};
use serde_json::json;
use sqlx::PgPool;

async fn insert_family(pool: &PgPool) -> InquiryId {
    let inquiry_id: i32 = sqlx::query_scalar(
        "INSERT INTO inquiries (email, contact_phone) VALUES ('mom@example.com', '555-0100') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap();

    let student_id: i32 = sqlx::query_scalar(
        "INSERT INTO students (inquiry_id, first_name, last_name) VALUES ($1, 'Ada', 'Lovelace') RETURNING id",
    )
    .bind(inquiry_id)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO hour_purchases (inquiry_id, hours, amount, purchased_on) VALUES ($1, 40, 1200, '2026-09-01')",
    )
    .bind(inquiry_id)
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO attendance (student_id, attended_on, hours, status) VALUES \
         ($1, '2026-09-07', 5, 'present'), ($1, '2026-09-14', 2, 'unexcused'), ($1, '2026-09-21', 1, 'excused')",
    )
    .bind(student_id)
    .execute(pool)
    .await
    .unwrap();

    InquiryId(inquiry_id)
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_balance_report_reads_all_cursors(pool: PgPool) {
    let inquiry_id = insert_family(&pool).await;
    let store = PgPortalStore::new(pool);

    let sets = store.account_balance(inquiry_id).await.unwrap();

    assert_eq!(sets.sets.len(), 3);
    assert_eq!(sets.set(0)[0]["Email"], json!("mom@example.com"));

    let fields = &sets.set(1)[0];
    assert_eq!(fields["Purchases"], json!(40.0));
    assert_eq!(fields["AttendancePresent"], json!(-5.0));
    assert_eq!(fields["UnexcusedAbsences"], json!(-2.0));
    assert_eq!(fields["MiscAdjustments"], json!(0.0));

    let ledger = sets.set(2);
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0]["PurchasedOn"], json!("2026-09-01"));
    assert_eq!(ledger[0]["Hours"], json!(40.0));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires DATABASE_URL"]
async fn test_contact_lookup_matches_exact_phone(pool: PgPool) {
    let inquiry_id = insert_family(&pool).await;
    let store = PgPortalStore::new(pool);

    let inquiry = store.find_inquiry_by_phone("555-0100").await.unwrap().unwrap();
    assert_eq!(inquiry.inquiry_id, inquiry_id);
    assert!(store.find_inquiry_by_phone("5550100").await.unwrap().is_none());

    let students = store.students_for_inquiry(inquiry_id).await.unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].first_name, "Ada");
}
