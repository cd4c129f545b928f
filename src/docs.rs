use crate::api::attendance::CreateAttendance;
use crate::api::employee::CreateEmployee;
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A minimal HR record-keeping service.

### 🔹 Features
- **Employees**
  - Create, list, view and delete employee records
  - Email addresses are unique
- **Attendance**
  - Mark a daily status (`Present` / `Absent`) for an employee
  - View one employee's history or page through all records

### 📦 Response Format
- JSON bodies, `skip` / `limit` pagination on list endpoints
- Errors are returned as `{"detail": "..."}`

---
Built with **Rust**, **Actix Web**, **SQLx** and **Utoipa**.
"#,
    ),
    paths(
        crate::api::index,

        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::mark_attendance,
        crate::api::attendance::read_attendance,
        crate::api::attendance::list_attendance
    ),
    components(
        schemas(
            CreateEmployee,
            Employee,
            CreateAttendance,
            Attendance
        )
    ),
    tags(
        (name = "Meta", description = "Service information"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/",
            "/employees/",
            "/employees/{employee_id}",
            "/attendance/",
            "/attendance/{employee_id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
