use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::{
    api::Pagination,
    error::ApiError,
    model::employee::Employee,
    store::employee::{self as store, is_email_conflict},
};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "Ada Lovelace", value_type = String)]
    pub full_name: String,
    #[schema(example = "ada@x.com", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "Engineering", value_type = String)]
    pub department: String,
}

impl CreateEmployee {
    /// Rejects blank fields and malformed emails. Values are stored as given.
    fn validate(&self) -> Result<(), ApiError> {
        required("full_name", &self.full_name)?;
        required("email", &self.email)?;
        required("department", &self.department)?;

        if !looks_like_email(&self.email) {
            return Err(ApiError::Validation(format!(
                "email must look like name@domain, got {:?}",
                self.email
            )));
        }

        Ok(())
    }
}

fn required(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Maps a failed insert: a unique violation means another request registered
/// the email after our pre-check.
fn insert_error(err: sqlx::Error, email: &str) -> ApiError {
    if is_email_conflict(&err) {
        debug!(email, "Duplicate email rejected by storage");
        ApiError::EmailTaken
    } else {
        ApiError::Database(err)
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/employees/",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = Employee),
        (status = 400, description = "Email already registered", body = Object, example = json!({
            "detail": "Email already registered"
        })),
        (status = 422, description = "Invalid payload", body = Object),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;
    let mut conn = pool.acquire().await?;

    if store::get_employee_by_email(&mut conn, &payload.email).await?.is_some() {
        debug!(email = %payload.email, "Rejected duplicate email");
        return Err(ApiError::EmailTaken);
    }

    // a concurrent insert can still win the race, the unique index catches it
    let employee = store::create_employee(
        &mut conn,
        &payload.full_name,
        &payload.email,
        &payload.department,
    )
    .await
    .map_err(|e| insert_error(e, &payload.email))?;

    info!(employee_id = employee.id, email = %employee.email, "Employee created");
    Ok(HttpResponse::Ok().json(employee))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/employees/",
    params(Pagination),
    responses(
        (status = 200, description = "Employees in insertion order", body = [Employee]),
        (status = 422, description = "Invalid query", body = Object)
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    pool: web::Data<SqlitePool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let (skip, limit) = query.window();
    let mut conn = pool.acquire().await?;

    let employees = store::list_employees(&mut conn, skip, limit).await?;
    debug!(skip, limit, count = employees.len(), "Listed employees");

    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let mut conn = pool.acquire().await?;

    match store::get_employee(&mut conn, employee_id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(ApiError::EmployeeNotFound),
    }
}

/// Delete Employee
///
/// Attendance recorded for the employee is kept.
#[utoipa::path(
    delete,
    path = "/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "The deleted employee", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let mut conn = pool.acquire().await?;

    let employee = store::delete_employee(&mut conn, employee_id)
        .await?
        .ok_or(ApiError::EmployeeNotFound)?;

    info!(employee_id, "Employee deleted");
    Ok(HttpResponse::Ok().json(employee))
}
