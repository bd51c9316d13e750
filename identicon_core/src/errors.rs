use image::ImageError;

#[derive(thiserror::Error, Debug)]
pub enum IdenticonError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("image encoding error: {0}")]
    EncodingError(String),
}

impl From<ImageError> for IdenticonError {
    fn from(error: ImageError) -> Self {
        match error {
            ImageError::IoError(io_error) => Self::IoError(io_error),
            other_error => Self::EncodingError(other_error.to_string()),
        }
    }
}
