#![deny(missing_docs)]

//! # Petstore Binary
//!
//! Serves the in-memory petstore over actix-web.

use actix_web::{middleware, web, App, HttpServer};
use clap::Parser;
use petstore_web::{configure, PetStore};
use std::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Petstore server options.
#[derive(Parser, Debug)]
#[command(name = "petstore", version, about)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "PETSTORE_BIND", default_value = "127.0.0.1:8080")]
    bind: String,

    /// Log filter, e.g. `info` or `petstore_web=debug,oapi_runtime=trace`.
    #[arg(long, env = "PETSTORE_LOG", default_value = "info")]
    log: String,
}

fn build_server(listener: TcpListener) -> std::io::Result<actix_web::dev::Server> {
    let store = web::Data::new(PetStore::new());
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .configure(configure::<PetStore>)
    })
    .listen(listener)?
    .run())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log))
        .init();

    let listener = TcpListener::bind(&args.bind)?;
    tracing::info!("petstore listening on {}", listener.local_addr()?);
    build_server(listener)?.await
}
