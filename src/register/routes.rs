use crate::response::{send_json, JsonResponse};
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

const REGISTRATION_PAGE: &str = include_str!("registration.html");

async fn registration_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(REGISTRATION_PAGE)
}

/// Accepts the form without reading it.
async fn register() -> HttpResponse {
    send_json(
        StatusCode::OK,
        &JsonResponse::new("success", "Registration successfully completed"),
    )
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/register")
            .route(web::get().to(registration_page))
            .route(web::post().to(register)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::CONTENT_TYPE;
    use actix_web::test::{self, TestRequest};
    use actix_web::App;

    #[actix_rt::test]
    async fn serves_the_registration_form() {
        let app = test::init_service(App::new().configure(init_routes)).await;

        let response =
            test::call_service(&app, TestRequest::get().uri("/register").to_request()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        let body = test::read_body(response).await;
        let page = std::str::from_utf8(&body).unwrap();
        assert!(page.contains(r#"<form action="/register" method="post">"#));
    }

    #[actix_rt::test]
    async fn accepts_any_submission() {
        let app = test::init_service(App::new().configure(init_routes)).await;

        let request = TestRequest::post()
            .uri("/register")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("name=Ann&email=a%40x.com&password=p&confirmPassword=q")
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        assert_eq!(
            &body[..],
            &b"{\"status\":\"success\",\"message\":\"Registration successfully completed\"}\n"[..]
        );
    }

    #[actix_rt::test]
    async fn other_methods_are_not_allowed() {
        let app = test::init_service(App::new().configure(init_routes)).await;

        let response =
            test::call_service(&app, TestRequest::put().uri("/register").to_request()).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
