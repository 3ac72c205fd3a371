//! HTTP handlers for the password validation service.
//!
//! Two routes exist: a root greeting used as a smoke check, and the
//! validation endpoint. The validation endpoint always answers 200; the
//! status signals "request processed", never "password accepted".

use actix_web::{HttpResponse, Responder, get, post, web};
use secrecy::SecretString;

use crate::config::ServerConfig;
use crate::evaluator::evaluate_password;
use crate::verdict::ValidationRequest;

/// Root greeting endpoint
///
/// # Endpoint
///
/// `GET /`
///
/// Returns a fixed HTML greeting embedding the configured contact
/// identifier. Always 200.
#[get("/")]
pub async fn hello(config: web::Data<ServerConfig>) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(format!(
            "Hello from my Password Validator! &mdash; <tt>{}</tt>",
            config.contact
        ))
}

/// Password validation endpoint
///
/// # Endpoint
///
/// `POST /v1/checkPassword`
///
/// # Request
///
/// ```json
/// {"password": "<candidate>"}
/// ```
///
/// # Response
///
/// ```json
/// {"valid": false, "reason": "Password must be at least 8 characters long."}
/// ```
///
/// A malformed body or a missing `password` field is treated as an empty
/// password rather than a client error, so the response is 200 in every
/// case and carries the usual verdict shape.
#[post("/v1/checkPassword")]
pub async fn check_password(body: web::Bytes) -> impl Responder {
    let request: ValidationRequest = serde_json::from_slice(&body).unwrap_or_default();
    let password = SecretString::new(request.password.into());

    let verdict = evaluate_password(&password);
    tracing::info!(valid = verdict.valid, "password checked");

    HttpResponse::Ok().json(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    fn test_config() -> web::Data<ServerConfig> {
        web::Data::new(ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            contact: "tester@example.com".to_string(),
        })
    }

    async fn check(body: &str) -> serde_json::Value {
        let app = test::init_service(App::new().service(check_password)).await;
        let req = test::TestRequest::post()
            .uri("/v1/checkPassword")
            .insert_header(("content-type", "application/json"))
            .set_payload(body.to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn test_root_endpoint() {
        let app = test::init_service(App::new().app_data(test_config()).service(hello)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::OK);
        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("Hello from my Password Validator!"));
        assert!(body.contains("<tt>tester@example.com</tt>"));
    }

    #[actix_web::test]
    async fn test_check_password_valid() {
        let data = check(r#"{"password": "Valid1!@"}"#).await;
        assert_eq!(data["valid"], true);
        assert_eq!(data["reason"], "");
    }

    #[actix_web::test]
    async fn test_check_password_too_short() {
        let data = check(r#"{"password": "V1!a"}"#).await;
        assert_eq!(data["valid"], false);
        assert!(data["reason"].as_str().unwrap().contains("at least 8 characters"));
    }

    #[actix_web::test]
    async fn test_check_password_missing_uppercase() {
        let data = check(r#"{"password": "valid1!@"}"#).await;
        assert_eq!(data["valid"], false);
        assert!(data["reason"].as_str().unwrap().contains("uppercase"));
    }

    #[actix_web::test]
    async fn test_check_password_missing_digit() {
        let data = check(r#"{"password": "Valid!@#"}"#).await;
        assert_eq!(data["valid"], false);
        assert!(data["reason"].as_str().unwrap().contains("digit"));
    }

    #[actix_web::test]
    async fn test_check_password_missing_special_char() {
        let data = check(r#"{"password": "Valid123"}"#).await;
        assert_eq!(data["valid"], false);
        assert!(data["reason"].as_str().unwrap().contains("special character"));
    }

    #[actix_web::test]
    async fn test_check_password_missing_field_treated_as_empty() {
        let data = check("{}").await;
        assert_eq!(data["valid"], false);
        assert!(data["reason"].as_str().unwrap().contains("at least 8 characters"));
    }

    #[actix_web::test]
    async fn test_check_password_malformed_body_treated_as_empty() {
        let data = check("not json at all").await;
        assert_eq!(data["valid"], false);
        assert!(data["reason"].as_str().unwrap().contains("at least 8 characters"));
    }

    #[actix_web::test]
    async fn test_check_password_empty_body_treated_as_empty() {
        let data = check("").await;
        assert_eq!(data["valid"], false);
        assert!(data["reason"].as_str().unwrap().contains("at least 8 characters"));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_not_found() {
        let app = test::init_service(App::new().service(check_password)).await;

        let req = test::TestRequest::get().uri("/v2/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
