use sqlx::SqliteConnection;

use crate::model::employee::Employee;

pub async fn get_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, email, department FROM employees WHERE id = ?",
    )
    .bind(employee_id)
    .fetch_optional(conn)
    .await
}

pub async fn get_employee_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, email, department FROM employees WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(conn)
    .await
}

/// Page of employees in insertion order.
pub async fn list_employees(
    conn: &mut SqliteConnection,
    skip: u32,
    limit: u32,
) -> Result<Vec<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        SELECT id, full_name, email, department
        FROM employees
        ORDER BY id
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(i64::from(limit))
    .bind(i64::from(skip))
    .fetch_all(conn)
    .await
}

/// Inserts a new employee.
///
/// A duplicate email surfaces as a unique-violation `sqlx::Error::Database`.
pub async fn create_employee(
    conn: &mut SqliteConnection,
    full_name: &str,
    email: &str,
    department: &str,
) -> Result<Employee, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (full_name, email, department)
        VALUES (?, ?, ?)
        RETURNING id, full_name, email, department
        "#,
    )
    .bind(full_name)
    .bind(email)
    .bind(department)
    .fetch_one(conn)
    .await
}

/// Hard delete. Returns the removed row, or `None` if there was nothing to remove.
pub async fn delete_employee(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(
        "DELETE FROM employees WHERE id = ? RETURNING id, full_name, email, department",
    )
    .bind(employee_id)
    .fetch_optional(conn)
    .await
}

/// True when `err` is the storage layer rejecting a duplicate email.
pub fn is_email_conflict(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}
