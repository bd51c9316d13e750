use actix_web::{
    dev::ServiceResponse,
    http::header as http_header,
    middleware::DefaultHeaders,
    HttpResponse,
};

use crate::errors::HttpError;

// Responses are PNG images and JSON errors, nothing else may be loaded
const CONTENT_SECURITY_POLICY: [(&str, &str); 4] = [
    ("default-src", "'none'"),
    ("base-uri", "'none'"),
    ("form-action", "'none'"),
    ("frame-ancestors", "'none'"),
];

fn content_security_policy() -> String {
    CONTENT_SECURITY_POLICY.iter()
        .map(|(directive, value)| format!("{directive} {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn create_default_headers_middleware() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((http_header::CONTENT_SECURITY_POLICY, content_security_policy()))
        .add((http_header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((http_header::REFERRER_POLICY, "no-referrer"))
}

pub fn log_server_error<B>(response: &ServiceResponse<B>) -> () {
    let Some(error) = response.response().error() else {
        return;
    };
    let request = response.request();
    log::error!(
        "{} {} failed with {}: {}",
        request.method(),
        request.path(),
        response.status().as_u16(),
        error,
    );
}

pub async fn not_found_view() -> Result<HttpResponse, HttpError> {
    Err(HttpError::NotFoundError("resource"))
}
