use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use class_scheduler::config::Config;
use class_scheduler::state::AppState;
use class_scheduler::{db, routes};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    if config.production {
        info!("Starting in production mode");
    }

    let pool = db::connect(&config).await.map_err(|e| {
        error!("Failed to create pool: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    db::migrate(&pool).await.map_err(|e| {
        error!("Failed to run migrations: {}", e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;

    let state = web::Data::new(AppState::new(pool, &config));

    info!("Server running at http://{}", config.server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes::routes::configure)
    })
    .bind(&config.server_address)?
    .run()
    .await
}
