use identicon_adapters::init::initialize_app;

mod errors;
mod http;
mod identicons;
mod server;

use server::{run_server, ACCESS_LOG_MODULE};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = initialize_app(&[ACCESS_LOG_MODULE]);
    run_server(config).await
}
