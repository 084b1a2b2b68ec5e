// web_app/error.rs - Error type shared by the engine, repositories and handlers
//
// Every variant is recoverable: handlers turn it into a JSON body with a
// status code, nothing here is fatal to the process.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A numeric id or range parameter failed to parse; the whole query is rejected
    #[error("Invalid parameter {name}: {value:?}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// The data store could not be reached or returned garbage
    #[error("Repository unavailable: {0}")]
    RepositoryUnavailable(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        AppError::InvalidParameter {
            name,
            value: value.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        AppError::NotFound { entity, id }
    }

    /// Stable machine-readable code used in error bodies
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidParameter { .. } => "invalid_parameter",
            AppError::NotFound { .. } => "not_found",
            AppError::RepositoryUnavailable(_) => "repository_unavailable",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::RepositoryUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::RepositoryUnavailable(format!("catalog decode failed: {err}"))
    }
}

#[cfg(feature = "db-tools")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::RepositoryUnavailable(err.to_string())
    }
}

#[cfg(feature = "web")]
impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RepositoryUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        if let AppError::RepositoryUnavailable(detail) = self {
            tracing::error!("Repository failure: {}", detail);
        }

        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.code(),
            "message": self.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AppError::invalid("categoryId", "abc");
        assert_eq!(err.to_string(), r#"Invalid parameter categoryId: "abc""#);
        assert_eq!(err.code(), "invalid_parameter");

        let err = AppError::not_found("Product", 42);
        assert_eq!(err.to_string(), "Product 42 not found");
        assert_eq!(err.code(), "not_found");
    }

    #[test]
    fn test_json_errors_become_repository_failures() {
        let decode = serde_json::from_str::<Vec<i32>>("not json").unwrap_err();
        let err: AppError = decode.into();
        assert_eq!(err.code(), "repository_unavailable");
    }

    #[cfg(feature = "web")]
    #[test]
    fn test_status_codes() {
        use actix_web::http::StatusCode;
        use actix_web::ResponseError;

        assert_eq!(AppError::invalid("fatRange", "x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("Allergen", 1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::RepositoryUnavailable("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
