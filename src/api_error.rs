use crate::response::{send_json, JsonResponse};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;

/// The only error a handler hands back to actix. The body never carries
/// more than the fixed status label and message.
#[derive(Debug, Display)]
#[display(fmt = "{} {}", status_code, message)]
pub struct ApiError {
    pub status_code: u16,
    pub status: String,
    pub message: String,
}

impl ApiError {
    pub fn new(status_code: u16, status: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError {
            status_code,
            status: status.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(400, "400", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(500, "500", message)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        send_json(
            self.status_code(),
            &JsonResponse::new(self.status.as_str(), self.message.as_str()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn renders_internal_error_envelope() {
        let response = ApiError::internal("Error creating user").error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body()).await.unwrap();
        let envelope: JsonResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(envelope, JsonResponse::new("500", "Error creating user"));
    }

    #[test]
    fn unknown_status_codes_fall_back_to_internal_error() {
        let error = ApiError::new(1000, "1000", "out of range");

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
