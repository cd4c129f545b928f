use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::{
    api::{Pagination, id_from_int_or_str},
    error::ApiError,
    model::attendance::Attendance,
    store::{attendance as store, employee::get_employee},
};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateAttendance {
    #[serde(deserialize_with = "id_from_int_or_str")]
    #[schema(example = 1, value_type = i64)]
    pub employee_id: i64,
    #[schema(example = "2024-01-01", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "Present", value_type = String)]
    pub status: String,
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/attendance/",
    request_body = CreateAttendance,
    responses(
        (status = 200, description = "Attendance recorded", body = Attendance),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee not found"
        })),
        (status = 422, description = "Invalid payload", body = Object),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateAttendance>,
) -> Result<HttpResponse, ApiError> {
    let CreateAttendance { employee_id, date, status } = payload.into_inner();
    let mut conn = pool.acquire().await?;

    if get_employee(&mut conn, employee_id).await?.is_none() {
        debug!(employee_id, "Attendance for unknown employee");
        return Err(ApiError::EmployeeNotFound);
    }

    // None here means the employee was deleted after the lookup above
    let record = store::create_attendance(&mut conn, employee_id, date, &status)
        .await?
        .ok_or(ApiError::EmployeeNotFound)?;

    info!(attendance_id = record.id, employee_id, %date, status = %record.status, "Attendance recorded");
    Ok(HttpResponse::Ok().json(record))
}

/// Attendance of one employee
///
/// Unknown employees get an empty list, not a 404.
#[utoipa::path(
    get,
    path = "/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records", body = [Attendance])
    ),
    tag = "Attendance"
)]
pub async fn read_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let mut conn = pool.acquire().await?;

    let records = store::get_attendance(&mut conn, employee_id).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// All attendance records
#[utoipa::path(
    get,
    path = "/attendance/",
    params(Pagination),
    responses(
        (status = 200, description = "Attendance records in insertion order", body = [Attendance]),
        (status = 422, description = "Invalid query", body = Object)
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<Pagination>,
) -> Result<HttpResponse, ApiError> {
    let (skip, limit) = query.window();
    let mut conn = pool.acquire().await?;

    let records = store::list_all_attendance(&mut conn, skip, limit).await?;
    debug!(skip, limit, count = records.len(), "Listed attendance");

    Ok(HttpResponse::Ok().json(records))
}
