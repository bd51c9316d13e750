use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;

use actix_cors::Cors;
use actix_web::{
    http::Method,
    middleware::{
        ErrorHandlers,
        ErrorHandlerResponse,
        Logger as ActixLogger,
        NormalizePath,
    },
    web,
    App,
    HttpServer,
};
use identicon_adapters::files::set_file_permissions;
use identicon_config::Config;

use crate::http::{
    create_default_headers_middleware,
    log_server_error,
    not_found_view,
};
use crate::identicons::views as identicons;

pub const ACCESS_LOG_MODULE: &str = "actix_web::middleware::logger";

fn create_cors_config(config: &Config) -> Cors {
    match config.http_cors_allowlist {
        None => Cors::permissive(),
        Some(ref allowlist) => {
            let mut cors_config = Cors::default();
            for origin in allowlist.iter() {
                cors_config = cors_config.allowed_origin(origin);
            };
            cors_config
                .allowed_methods([Method::GET])
                .expose_any_header()
        },
    }
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let num_workers = std::cmp::max(num_cpus::get(), 4);
    let http_socket_addr = config.http_socket();
    let http_socket_perms = config.http_socket_perms;

    let http_server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(create_cors_config(&config))
            .wrap(ActixLogger::new("%r : %s : %{r}a"))
            .wrap(ErrorHandlers::new()
                .default_handler_server(|response| {
                   log_server_error(&response);
                   Ok(ErrorHandlerResponse::Response(response.map_into_left_body()))
                })
            )
            .wrap(create_default_headers_middleware())
            .app_data(web::Data::new(config.clone()))
            .service(identicons::pixel_view)
            .service(identicons::identicon_view)
            .default_service(web::to(not_found_view))
    });

    let http_server = if let Ok(addr) = SocketAddr::from_str(&http_socket_addr) {
        http_server.bind(addr)?
    } else {
        // Assume unix socket path
        let http_socket_path = Path::new(&http_socket_addr);
        let http_server = http_server.bind_uds(http_socket_path)?;
        if let Some(socket_perms) = http_socket_perms {
            set_file_permissions(http_socket_path, socket_perms)?;
        };
        http_server
    };
    log::info!("listening on {}", http_socket_addr);
    http_server
        .workers(num_workers)
        .run()
        .await?;
    log::info!("server terminated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use actix_web::{
        http::{header as http_header, StatusCode},
        test,
    };
    use super::*;

    #[actix_web::test]
    async fn test_cors_allowlist() {
        let config = Config {
            http_cors_allowlist: Some(vec!["https://example.com".to_string()]),
            ..Config::for_test()
        };
        let app = test::init_service(
            App::new()
                .wrap(create_cors_config(&config))
                .wrap(create_default_headers_middleware())
                .app_data(web::Data::new(config.clone()))
                .service(identicons::identicon_view)
        ).await;
        let request = test::TestRequest::get()
            .uri("/alice")
            .insert_header((http_header::ORIGIN, "https://example.com"))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(http_header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap()
                .to_str().unwrap(),
            "https://example.com",
        );
        assert_eq!(
            headers.get(http_header::X_CONTENT_TYPE_OPTIONS).unwrap()
                .to_str().unwrap(),
            "nosniff",
        );
    }
}
