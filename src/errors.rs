use actix_web::{
    error::ResponseError,
    http::StatusCode,
    HttpResponse,
    HttpResponseBuilder,
};
use serde::Serialize;

use identicon_core::IdenticonError;

#[derive(thiserror::Error, Debug)]
pub enum HttpError {
    #[error("failed to generate image: {0}")]
    ImageError(#[from] IdenticonError),

    #[error("{0} not found")]
    NotFoundError(&'static str),
}

#[derive(Serialize)]
pub struct ErrorData {
    error: String,
    error_description: Option<String>,
}

impl ResponseError for HttpError {
    fn error_response(&self) -> HttpResponse {
        let error_data = ErrorData {
            error: self.to_string(),
            error_description: Some(self.to_string()),
        };
        HttpResponseBuilder::new(self.status_code()).json(error_data)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFoundError(_) => StatusCode::NOT_FOUND,
            Self::ImageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
