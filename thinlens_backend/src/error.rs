use actix_web::{
    error::JsonPayloadError, http::StatusCode, web::JsonConfig, HttpRequest, HttpResponse,
    ResponseError,
};
use serde::{Deserialize, Serialize};
use thinlens::error::ThinLensError;
use utoipa::ToSchema;

/// Structure holding an error mesaage
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status
    #[schema(example = "400")]
    status: u16,
    /// Error category (normally corresponds to `ThinLensError` enum)
    #[schema(example = "Parameter")]
    category: String,
    /// Description message of the error
    message: String,
}
impl ErrorResponse {
    #[must_use]
    pub fn new(status: u16, category: &str, message: &str) -> Self {
        Self {
            status,
            category: category.to_string(),
            message: message.to_string(),
        }
    }
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn category(&self) -> &str {
        &self.category
    }
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn message(&self) -> &str {
        &self.message
    }
}
impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<ThinLensError> for ErrorResponse {
    fn from(error: ThinLensError) -> Self {
        let status = match &error {
            ThinLensError::DegenerateInput(_) | ThinLensError::Parameter(_) => {
                StatusCode::BAD_REQUEST
            }
            ThinLensError::Render(_) | ThinLensError::Console(_) | ThinLensError::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status: status.as_u16(),
            category: error.category().to_string(),
            message: error.message().to_string(),
        }
    }
}
impl ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
    fn error_response(&self) -> HttpResponse {
        let mut res = actix_web::HttpResponseBuilder::new(self.status_code());
        res.json(self)
    }
}
#[allow(clippy::needless_pass_by_value)]
fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ErrorResponse::new(
        StatusCode::BAD_REQUEST.as_u16(),
        "Deserialization",
        &format!("invalid request body: {error}"),
    )
    .into()
}
/// Configuration of the JSON extractor reporting malformed request bodies as [`ErrorResponse`].
#[must_use]
pub fn json_config() -> JsonConfig {
    JsonConfig::default().error_handler(json_error_handler)
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from_thinlens_error() {
        let e = ErrorResponse::from(ThinLensError::Parameter("object distance".into()));
        assert_eq!(e.status(), 400);
        assert_eq!(e.category(), "Parameter");
        assert_eq!(e.message(), "object distance");
        let e = ErrorResponse::from(ThinLensError::Other("test".into()));
        assert_eq!(e.status(), 500);
        assert_eq!(e.category(), "Other");
    }
    #[test]
    fn status_code() {
        let e = ErrorResponse::new(404, "api not found", "not found");
        assert_eq!(e.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(format!("{e}"), "not found");
        let e = ErrorResponse::new(1, "invalid", "invalid status");
        assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
