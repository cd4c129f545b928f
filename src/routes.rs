use crate::{
    api::{self, attendance, employee},
    config::Config,
};
use actix_cors::Cors;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    // Extractor failures
    cfg.app_data(web::JsonConfig::default().error_handler(api::json_error))
        .app_data(web::PathConfig::default().error_handler(api::path_error))
        .app_data(web::QueryConfig::default().error_handler(api::query_error));

    cfg.route("/", web::get().to(api::index));

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{employee_id}
            .service(
                web::resource("/{employee_id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    );

    cfg.service(
        web::scope("/attendance")
            // /attendance
            .service(
                web::resource("")
                    .route(web::post().to(attendance::mark_attendance))
                    .route(web::get().to(attendance::list_attendance)),
            )
            // /attendance/{employee_id}
            .service(
                web::resource("/{employee_id}").route(web::get().to(attendance::read_attendance)),
            ),
    );
}

/// CORS policy from `CORS_ALLOWED_ORIGINS`; no origins configured means any origin.
pub fn cors(config: &Config) -> Cors {
    if config.cors_allowed_origins.is_empty() {
        return Cors::permissive();
    }

    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, http::header, test as actix_test};

    fn config_with_origins(origins: &[&str]) -> Config {
        Config {
            server_addr: "127.0.0.1:0".into(),
            database_url: "sqlite::memory:".into(),
            db_max_connections: 1,
            cors_allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
            log_dir: "logs".into(),
            log_level: tracing::Level::INFO,
        }
    }

    #[actix_web::test]
    async fn listed_origin_is_allowed() {
        let config = config_with_origins(&["http://localhost:5173"]);
        let app = actix_test::init_service(
            App::new()
                .wrap(cors(&config))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;

        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[actix_web::test]
    async fn unlisted_origin_gets_no_allow_header() {
        let config = config_with_origins(&["http://localhost:5173"]);
        let app = actix_test::init_service(
            App::new()
                .wrap(cors(&config))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "http://evil.example"))
            .to_request();
        let resp = actix_test::try_call_service(&app, req).await;

        let allowed = match resp {
            Ok(resp) => resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Err(_) => false,
        };
        assert!(!allowed);
    }
}
