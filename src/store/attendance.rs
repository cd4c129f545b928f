use chrono::NaiveDate;
use sqlx::SqliteConnection;

use crate::model::attendance::Attendance;

/// Records attendance for an employee that exists at write time.
///
/// The existence check and the insert are one statement, so a concurrent
/// delete cannot slip between them. Returns `None` when no employee has
/// `employee_id`.
pub async fn create_attendance(
    conn: &mut SqliteConnection,
    employee_id: i64,
    date: NaiveDate,
    status: &str,
) -> Result<Option<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        INSERT INTO attendance (employee_id, date, status)
        SELECT ?, ?, ?
        WHERE EXISTS (SELECT 1 FROM employees WHERE id = ?)
        RETURNING id, employee_id, date, status
        "#,
    )
    .bind(employee_id)
    .bind(date)
    .bind(status)
    .bind(employee_id)
    .fetch_optional(conn)
    .await
}

/// All records for one employee. Empty for unknown employees.
pub async fn get_attendance(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        "SELECT id, employee_id, date, status FROM attendance WHERE employee_id = ? ORDER BY id",
    )
    .bind(employee_id)
    .fetch_all(conn)
    .await
}

pub async fn list_all_attendance(
    conn: &mut SqliteConnection,
    skip: u32,
    limit: u32,
) -> Result<Vec<Attendance>, sqlx::Error> {
    sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, status
        FROM attendance
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(i64::from(limit))
    .bind(i64::from(skip))
    .fetch_all(conn)
    .await
}
