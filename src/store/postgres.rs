use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveTime;
use serde_json::{Number, Value};
use sqlx::postgres::PgRow;
use sqlx::{Column, Executor, PgPool, Row, TypeInfo};
use tracing::instrument;

use parentportal_core::AppError;
use parentportal_models::{
    BalanceResultSets, Inquiry, InquiryId, RawSession, ResultRow, Student, StudentId, TimeSlotId,
};

use super::{BalanceSource, PortalStore};

/// [`PortalStore`] and [`BalanceSource`] over the center's PostgreSQL database.
#[derive(Clone, Debug)]
pub struct PgPortalStore {
    pool: PgPool,
}

impl PgPortalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl PortalStore for PgPortalStore {
    #[instrument(skip(self))]
    async fn find_inquiry_by_phone(&self, phone: &str) -> Result<Option<Inquiry>, AppError> {
        sqlx::query_as::<_, Inquiry>(
            r#"
            SELECT id AS inquiry_id, email, contact_phone
            FROM inquiries
            WHERE contact_phone = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(phone)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to look up inquiry by contact phone")
        .map_err(AppError::database)
    }

    #[instrument(skip(self))]
    async fn students_for_inquiry(&self, inquiry_id: InquiryId) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT id, first_name, last_name
            FROM students
            WHERE inquiry_id = $1
            ORDER BY id
            "#,
        )
        .bind(inquiry_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch students for inquiry")
        .map_err(AppError::database)
    }

    #[instrument(skip(self))]
    async fn sessions_for_student(
        &self,
        student_id: StudentId,
    ) -> Result<Vec<RawSession>, AppError> {
        sqlx::query_as::<_, RawSession>(
            r#"
            SELECT day, time_id, schedule_date, student_id
            FROM session_schedule
            WHERE student_id = $1
            ORDER BY id
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch sessions for student")
        .map_err(AppError::database)
    }

    #[instrument(skip(self))]
    async fn time_for_slot(&self, time_id: TimeSlotId) -> Result<Option<String>, AppError> {
        let slot_time = sqlx::query_scalar::<_, Option<NaiveTime>>(
            "SELECT slot_time FROM time_slots WHERE id = $1",
        )
        .bind(time_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch time slot")
        .map_err(AppError::database)?;

        Ok(slot_time.flatten().map(|t| t.format("%H:%M:%S").to_string()))
    }
}

#[async_trait]
impl BalanceSource for PgPortalStore {
    /// Calls `report_account_balance` and drains each returned cursor in order.
    ///
    /// Cursors only live inside the calling transaction, so the call and every
    /// `FETCH` share one connection.
    #[instrument(skip(self))]
    async fn account_balance(
        &self,
        inquiry_id: InquiryId,
    ) -> Result<BalanceResultSets, AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start balance report transaction")
            .map_err(AppError::database)?;

        let cursors: Vec<String> = sqlx::query_scalar(
            "SELECT cursor_name::text FROM report_account_balance($1) AS cursor_name",
        )
        .bind(inquiry_id)
        .fetch_all(&mut *tx)
        .await
        .context("Failed to run balance report")
        .map_err(AppError::database)?;

        let mut sets = Vec::with_capacity(cursors.len());
        for cursor in &cursors {
            let fetch = format!("FETCH ALL FROM {}", quote_identifier(cursor));
            let rows = Executor::fetch_all(&mut *tx, sqlx::raw_sql(&fetch))
                .await
                .with_context(|| format!("Failed to fetch balance report cursor {cursor}"))
                .map_err(AppError::database)?;
            sets.push(rows.iter().map(row_to_json).collect());
        }

        tx.commit()
            .await
            .context("Failed to close balance report transaction")
            .map_err(AppError::database)?;

        Ok(BalanceResultSets::new(sets))
    }
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// How a column's value is decoded, chosen by its PostgreSQL type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Numeric,
    /// Anything else is read as its text form.
    Text,
}

impl ColumnKind {
    fn of(type_name: &str) -> Self {
        match type_name {
            "BOOL" => Self::Bool,
            "INT2" => Self::Int2,
            "INT4" => Self::Int4,
            "INT8" => Self::Int8,
            "FLOAT4" => Self::Float4,
            "FLOAT8" => Self::Float8,
            "NUMERIC" => Self::Numeric,
            _ => Self::Text,
        }
    }
}

/// A decoded column, before it becomes JSON.
#[derive(Debug, Clone, PartialEq)]
enum ColumnValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Numeric(String),
    Text(String),
}

impl ColumnValue {
    fn into_json(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Int(i) => Value::from(i),
            Self::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            Self::Numeric(s) => match s.parse::<f64>().ok().and_then(Number::from_f64) {
                Some(n) => Value::Number(n),
                None => Value::String(s),
            },
            Self::Text(s) => Value::String(s),
        }
    }
}

fn decode_column(row: &PgRow, idx: usize, kind: ColumnKind) -> ColumnValue {
    let value = match kind {
        ColumnKind::Bool => row.try_get::<Option<bool>, _>(idx).ok().flatten().map(ColumnValue::Bool),
        ColumnKind::Int2 => row
            .try_get::<Option<i16>, _>(idx)
            .ok()
            .flatten()
            .map(|v| ColumnValue::Int(v.into())),
        ColumnKind::Int4 => row
            .try_get::<Option<i32>, _>(idx)
            .ok()
            .flatten()
            .map(|v| ColumnValue::Int(v.into())),
        ColumnKind::Int8 => row.try_get::<Option<i64>, _>(idx).ok().flatten().map(ColumnValue::Int),
        ColumnKind::Float4 => row
            .try_get::<Option<f32>, _>(idx)
            .ok()
            .flatten()
            .map(|v| ColumnValue::Float(v.into())),
        ColumnKind::Float8 => row
            .try_get::<Option<f64>, _>(idx)
            .ok()
            .flatten()
            .map(ColumnValue::Float),
        ColumnKind::Numeric => row
            .try_get_unchecked::<Option<String>, _>(idx)
            .ok()
            .flatten()
            .map(ColumnValue::Numeric),
        ColumnKind::Text => row
            .try_get_unchecked::<Option<String>, _>(idx)
            .ok()
            .flatten()
            .map(ColumnValue::Text),
    };
    value.unwrap_or(ColumnValue::Null)
}

/// Converts a row of unknown shape into a JSON object keyed by column name.
///
/// Rows fetched through the simple query protocol arrive in text format, so
/// any column type without a dedicated mapping is read as its text form.
fn row_to_json(row: &PgRow) -> ResultRow {
    let mut map = ResultRow::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let kind = ColumnKind::of(column.type_info().name());
        map.insert(
            column.name().to_string(),
            decode_column(row, idx, kind).into_json(),
        );
    }
    map
}
