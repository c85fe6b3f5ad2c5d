use actix_web::{HttpResponse, Result};

/// GET /. The page is presentation only; the behavioral surface is
/// POST /api/chat.
pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../static/index.html")))
}
