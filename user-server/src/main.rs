mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use std::sync::Arc;

use application::user_service::UserService;
use data::in_memory_user_repository::InMemoryUserRepository;
use infrastructure::config::AppConfig;
use infrastructure::logging::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;

    let user_repo = Arc::new(InMemoryUserRepository::new());
    let user_service = UserService::new(Arc::clone(&user_repo));

    server::start_rest_server(config, user_service).await
}
