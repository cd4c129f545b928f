pub mod attendance;
pub mod employee;

use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use utoipa::IntoParams;

use crate::error::ApiError;

pub const DEFAULT_LIMIT: u32 = 100;

/// `?skip=&limit=` window shared by the list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Rows to skip, default 0
    pub skip: Option<u32>,
    /// Maximum rows to return, default 100
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn window(&self) -> (u32, u32) {
        (self.skip.unwrap_or(0), self.limit.unwrap_or(DEFAULT_LIMIT))
    }
}

/// API banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = Object, example = json!({
            "message": "Welcome to HRMS Lite API"
        }))
    ),
    tag = "Meta"
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Welcome to HRMS Lite API"
    }))
}

// Extractor failures answer 422 with the same `{"detail": ...}` body as handler errors.

pub fn json_error(err: actix_web::error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}

pub fn path_error(err: actix_web::error::PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}

pub fn query_error(err: actix_web::error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}

/// Accepts an id sent either as a JSON integer or as a numeric string.
pub fn id_from_int_or_str<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Int(i64),
        Text(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Int(id) => Ok(id),
        Id::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {s:?}"))),
    }
}
