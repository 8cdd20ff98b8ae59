use actix_web::{http, web, App, HttpServer};
use actix_web::dev::Server;
use tracing_actix_web::TracingLogger;
use std::net::TcpListener;
use actix_cors::Cors;

pub mod cli;
pub mod config;
mod handlers;
pub mod models;
pub mod roster;
mod routes;
pub mod services;
pub mod telemetry;
pub mod views;

use crate::routes::init_routes;
use crate::services::store::FantasyStore;

/// Start the in-memory fantasy backend on `listener`.
pub fn run(listener: TcpListener, store: FantasyStore) -> Result<Server, std::io::Error> {
    // web::Data is an Arc, every worker shares the same store
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:3001")
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(store.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
