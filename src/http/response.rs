//! HTTP response building module
//!
//! Provides builders for the status responses the server emits, decoupled
//! from path resolution and file I/O.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const NOT_FOUND_BODY: &str = "<h1>404 Not Found</h1><p>The requested file was not found.</p>";

/// Build 200 OK response carrying file bytes
pub fn build_file_response(
    content: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response with HTML body
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from(NOT_FOUND_BODY)))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(NOT_FOUND_BODY)))
        })
}

/// Build 500 Internal Server Error response naming the underlying error code
pub fn build_500_response(error_code: &str) -> Response<Full<Bytes>> {
    let body = format!(
        "<h1>500 Internal Server Error</h1><p>Sorry, check with the site admin for error: {error_code} ..</p>"
    );

    Response::builder()
        .status(500)
        .header("Content-Type", "text/html")
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response_headers() {
        let resp = build_file_response(b"body {}".to_vec(), "text/css", false);
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert_eq!(resp.headers()["Content-Length"], "7");
    }

    #[test]
    fn test_head_response_keeps_length_drops_body() {
        let resp = build_file_response(b"<html></html>".to_vec(), "text/html", true);
        assert_eq!(resp.headers()["Content-Length"], "13");
    }

    #[test]
    fn test_404_is_html() {
        let resp = build_404_response();
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
    }

    #[test]
    fn test_500_names_the_error_code() {
        let resp = build_500_response("EACCES");
        assert_eq!(resp.status(), 500);
        assert_eq!(resp.headers()["Content-Type"], "text/html");
    }

    #[test]
    fn test_options_with_cors() {
        let resp = build_options_response(true);
        assert_eq!(resp.status(), 204);
        assert_eq!(resp.headers()["Access-Control-Allow-Origin"], "*");

        let plain = build_options_response(false);
        assert!(plain.headers().get("Access-Control-Allow-Origin").is_none());
    }
}
