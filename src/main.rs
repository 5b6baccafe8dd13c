use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use comment::memory::InMemoryCommentStore;
use comment::service::{CommentStore, MongoCommentStore};
use config::{AppConfig, StoreBackend};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use router::index::routes;
use std::io;
use std::sync::Arc;

mod comment;
mod config;
mod database;
mod middleware;
mod router;
mod utils;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let store: Arc<dyn CommentStore> = match config.store_backend {
        StoreBackend::Mongo => {
            let mongo_client = database::connect_to_mongo(&config.mongodb_uri)
                .await
                .map_err(io::Error::other)?;
            Arc::new(MongoCommentStore::new(&mongo_client, &config.database_name))
        }
        StoreBackend::Memory => {
            info!("Using in-memory comment store");
            Arc::new(InMemoryCommentStore::new())
        }
    };

    let bind = (config.host.clone(), config.port);
    info!("Starting server on http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let store = store.clone();
        let config = config.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| routes(cfg, store, config))
    })
    .bind(bind)?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
