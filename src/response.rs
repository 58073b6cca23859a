use actix_web::http::{header::ContentType, StatusCode};
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Status/message envelope returned by every JSON endpoint that does not
/// hand back an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonResponse {
    pub status: String,
    pub message: String,
}

impl JsonResponse {
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        JsonResponse {
            status: status.into(),
            message: message.into(),
        }
    }
}

/// Writes `payload` as a JSON document terminated by a newline.
pub fn send_json<T: Serialize>(status: StatusCode, payload: &T) -> HttpResponse {
    let mut body = match serde_json::to_vec(payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to encode response body: {}", e);
            Vec::new()
        }
    };
    body.push(b'\n');

    HttpResponse::build(status)
        .content_type(ContentType::json())
        .body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::header::CONTENT_TYPE;

    #[actix_rt::test]
    async fn writes_json_with_status_and_trailing_newline() {
        let response = send_json(
            StatusCode::BAD_REQUEST,
            &JsonResponse::new("400", "Invalid JSON message"),
        );

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(
            &body[..],
            b"{\"status\":\"400\",\"message\":\"Invalid JSON message\"}\n"
        );
    }
}
