use crate::application::user_service::UserService;
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::infrastructure::config::AppConfig;
use crate::presentation::handlers;
use crate::presentation::middleware::request_context;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Logger, from_fn};
use actix_web::{App, HttpResponse, HttpServer, web};
use serde_json::json;
use tracing::info;

const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("X-Content-Type-Options", "nosniff"),
    ("Referrer-Policy", "no-referrer"),
    ("Permissions-Policy", "geolocation=()"),
    ("Cross-Origin-Opener-Policy", "same-origin"),
];

pub async fn start_rest_server<R: UserRepository + 'static>(
    config: AppConfig,
    user_service: UserService<R>,
) -> anyhow::Result<()> {
    info!(host = %config.host, port = config.port, "HTTP server starting");
    let bind_address = (config.host.clone(), config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(from_fn(request_context))
            .wrap(
                SECURITY_HEADERS
                    .into_iter()
                    .fold(DefaultHeaders::new(), |headers, pair| headers.add(pair)),
            )
            .wrap(cors_for(&config.cors_origins))
            .configure(routes(user_service.clone()))
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}

/// Registers the user routes against whichever backend `user_service` wraps.
pub fn routes<R: UserRepository + 'static>(
    user_service: UserService<R>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(user_service))
            .app_data(json_config())
            .service(
                web::resource("/users").route(web::post().to(handlers::user::create_user::<R>)),
            )
            .service(web::resource("/api/health").route(web::get().to(health::<R>)));
    }
}

/// Malformed bodies surface as validation failures with the usual error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        DomainError::validation("body", "invalid_json", err.to_string()).into()
    })
}

fn cors_for(origins: &[String]) -> Cors {
    origins.iter().fold(
        Cors::default()
            .allowed_methods(["GET", "POST"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600),
        |cors, origin| cors.allowed_origin(origin),
    )
}

/// Healthy only while the user store answers.
async fn health<R: UserRepository + 'static>(
    users: web::Data<UserService<R>>,
) -> Result<HttpResponse, DomainError> {
    let stored = users.count_users().await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ok", "users": stored })))
}
