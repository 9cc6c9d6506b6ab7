use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Course ID {0} not found in database")]
    CourseNotFound(i32),
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    #[error("{0}")]
    InternalError(String),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    #[error(transparent)]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::CourseNotFound(course_id) => {
                debug!("Lookup error: {}", Error::CourseNotFound(course_id));

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Course not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Error::MultipartError(err) => {
                debug!("Malformed form submission: {}", err);

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: "Malformed form submission".to_string(),
                    }),
                )
                    .into_response()
            }
            err => {
                error!("Internal server error: {}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
impl From<Error> for coursehub_test_utils::TestError {
    fn from(err: Error) -> Self {
        coursehub_test_utils::TestError::AppError(err.to_string())
    }
}
