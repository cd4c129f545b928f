use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One day's status for one employee.
///
/// `employee_id` is not a declared foreign key: rows outlive the employee they
/// point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": 1,
        "date": "2024-01-01",
        "status": "Present"
    })
)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = 1)]
    pub employee_id: i64,

    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    /// Usually "Present" or "Absent", stored as given.
    #[schema(example = "Present")]
    pub status: String,
}
