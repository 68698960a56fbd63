mod config;
mod constants;
mod database;
mod errors;
mod extractors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use std::io;
use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

use crate::config::CONFIG;
use crate::repositories::UserRepository;
use crate::services::{SystemClock, TimeUuidGenerator, UserService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    info!("Opening database at {}", CONFIG.database_url);
    let pool = database::create_pool(&CONFIG.database_url, CONFIG.database_max_connections)
        .await
        .map_err(|e| io::Error::other(format!("database: {}", e)))?;

    database::run_migrations(&pool)
        .await
        .map_err(|e| io::Error::other(format!("schema: {}", e)))?;

    // Initialize services
    let user_service = web::Data::new(UserService::new(
        Arc::new(UserRepository::new(pool)),
        Arc::new(TimeUuidGenerator::new()),
        Arc::new(SystemClock),
    ));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
