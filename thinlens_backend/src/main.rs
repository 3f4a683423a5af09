use clap::Parser;
use std::error::Error;
use thinlens_backend::server::{start, ServerConfig};

#[actix_web::main]
async fn main() -> core::result::Result<(), impl Error> {
    start(&ServerConfig::parse()).await
}
