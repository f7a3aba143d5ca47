use config::Config;
use dotenvy::dotenv;

use customer_grid::models::config::ServerConfig;
use customer_grid::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let server_config: ServerConfig = config
        .try_deserialize()
        .map_err(|e| std::io::Error::other(format!("Failed to parse configuration: {e}")))?;

    run(server_config).await
}
