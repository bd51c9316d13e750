use actix_web::{
    get,
    http::header::{CacheControl, CacheDirective},
    web,
    HttpResponse,
};

use identicon_config::Config;
use identicon_core::{
    canvas::PNG_MEDIA_TYPE,
    generate_identicon,
    generate_pixel,
};

use crate::errors::HttpError;

fn png_response(config: &Config, png: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(PNG_MEDIA_TYPE)
        .append_header(CacheControl(vec![
            CacheDirective::MaxAge(config.cache_max_age),
        ]))
        .body(png)
}

#[get("/")]
pub async fn pixel_view(
    config: web::Data<Config>,
) -> Result<HttpResponse, HttpError> {
    let png = generate_pixel()?;
    Ok(png_response(&config, png))
}

#[get("/{name}")]
pub async fn identicon_view(
    config: web::Data<Config>,
    name: web::Path<String>,
) -> Result<HttpResponse, HttpError> {
    log::info!("identicon: {}", name);
    let png = generate_identicon(&name)?;
    Ok(png_response(&config, png))
}
