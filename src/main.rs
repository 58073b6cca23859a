#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate log;

mod api_error;
mod config;
mod db;
mod person;
mod register;
mod response;
mod schema;

use actix_web::{middleware, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use listenfd::ListenFd;
use person::{PgUserStore, UserStore};
use std::fmt::Display;
use std::io;
use std::sync::Arc;

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(startup_error)?;
    let pool = db::init_pool(&config).map_err(startup_error)?;
    db::run_migrations(&pool).map_err(startup_error)?;

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
    let store = web::Data::from(store);

    let mut listenfd = ListenFd::from_env();

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(middleware::Logger::default())
            .configure(person::init_routes)
            .configure(register::init_routes)
    });

    server = match listenfd.take_tcp_listener(0)? {
        Some(listener) => server.listen(listener)?,
        None => server.bind(config.bind_address())?,
    };

    info!("Starting server 🚀");

    server.run().await
}

fn startup_error<E: Display>(err: E) -> io::Error {
    error!("{}", err);
    io::Error::new(io::ErrorKind::Other, err.to_string())
}
