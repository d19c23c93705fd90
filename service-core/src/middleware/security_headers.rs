use axum::{extract::Request, http::header, middleware::Next, response::IntoResponse};

/// Paths that serve browser-facing HTML or assets rather than JSON.
fn is_page_route(path: &str) -> bool {
    path == "/" || path.starts_with("/static/")
}

pub async fn security_headers_middleware(req: Request, next: Next) -> impl IntoResponse {
    let is_page = is_page_route(req.uri().path());

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        header::HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        header::HeaderValue::from_static("no-referrer"),
    );

    if is_page {
        // The landing page loads its script from /static and uses inline styles.
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static(
                "default-src 'self'; \
                 script-src 'self'; \
                 style-src 'self' 'unsafe-inline'; \
                 connect-src 'self'; \
                 frame-ancestors 'none'",
            ),
        );
    } else {
        headers.insert(
            header::CONTENT_SECURITY_POLICY,
            header::HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
        );
    }
    headers.insert(
        header::X_FRAME_OPTIONS,
        header::HeaderValue::from_static("DENY"),
    );

    response
}
