use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::api_v1_customers_query;
use crate::routes::main::{add_customer, delete_customer, show_index};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Signing key and cookie store for flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(
                web::scope("/api")
                    .wrap(Cors::permissive())
                    .service(api_v1_customers_query),
            )
            .service(show_index)
            .service(add_customer)
            .service(delete_customer)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
