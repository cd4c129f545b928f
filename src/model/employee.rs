use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "full_name": "Ada Lovelace",
        "email": "ada@x.com",
        "department": "Engineering"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Ada Lovelace")]
    pub full_name: String,

    #[schema(example = "ada@x.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,
}
