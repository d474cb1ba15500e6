use std::env;

use actix_cors::Cors;
use actix_web::http::header;

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parse `CORS_ALLOWED_ORIGINS`, keeping only http(s) entries.
pub fn allowed_origins(raw: &str) -> Vec<String> {
    let parsed: Vec<String> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect();

    if parsed.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        parsed
    }
}

/// The directory is read-only, so only GET and preflight are allowed.
pub fn cors_middleware() -> Cors {
    let origins = allowed_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::allowed_origins;

    #[test]
    fn falls_back_to_localhost() {
        assert_eq!(
            allowed_origins(""),
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
        assert_eq!(allowed_origins("null, ftp://x"), allowed_origins(""));
    }

    #[test]
    fn keeps_configured_origins() {
        assert_eq!(
            allowed_origins(" https://betguide.app ,http://localhost:5173"),
            vec!["https://betguide.app", "http://localhost:5173"]
        );
    }
}
