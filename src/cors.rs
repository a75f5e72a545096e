//! # CORS Policy
//!
//! Browser frontends for DeWork are served from a different origin than
//! this API (the development frontend at `http://localhost:3000` by
//! default), so responses must carry cross-origin headers the browser
//! accepts.
//!
//! The policy mirrors the configuration surface: the set of allowed
//! origins comes from `CORS_ORIGINS`, while all methods and headers are
//! allowed and credentialed requests are supported.

use actix_cors::Cors;

/// Build the CORS middleware for the configured origin list.
///
/// Each entry in `origins` is registered verbatim as an allowed origin.
/// Entries are not validated here; an entry that is not a well-formed
/// origin surfaces as a middleware construction error at startup.
///
/// ## Example
///
/// ```rust,ignore
/// let cors = configure_cors(&config.cors_origins);
/// let app = App::new().wrap(cors);
/// ```
pub fn configure_cors(origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .supports_credentials();

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{header, Method};
    use actix_web::{test, web, App, HttpResponse};

    fn origins(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    async fn ping() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    #[actix_rt::test]
    async fn test_listed_origin_receives_allow_origin_header() {
        let app = test::init_service(
            App::new()
                .wrap(configure_cors(&origins(&["https://a.com", "https://b.com"])))
                .route("/", web::get().to(ping)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://a.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://a.com"
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[actix_rt::test]
    async fn test_unlisted_origin_gets_no_allow_origin_header() {
        let app = test::init_service(
            App::new()
                .wrap(configure_cors(&origins(&["https://a.com"])))
                .route("/", web::get().to(ping)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://unlisted.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[actix_rt::test]
    async fn test_preflight_allows_any_method_and_header() {
        let app = test::init_service(
            App::new()
                .wrap(configure_cors(&origins(&["https://a.com"])))
                .route("/", web::get().to(ping)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/")
            .insert_header((header::ORIGIN, "https://a.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://a.com"
        );
    }
}
