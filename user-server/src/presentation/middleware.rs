use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{Error, HttpMessage};
use tracing::info;
use uuid::Uuid;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
const SERVER_TIMING_HEADER: HeaderName = HeaderName::from_static("server-timing");

/// Correlation id of the request being served, readable via `web::ReqData`.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Tags the request with an id (the caller's `x-request-id`, or a fresh UUID),
/// then logs the outcome and reports the handling time in `server-timing`.
/// Mount with `actix_web::middleware::from_fn(request_context)`.
pub async fn request_context(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let started = Instant::now();
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned);
    req.extensions_mut().insert(RequestId(id.clone()));
    let method = req.method().clone();
    let path = req.path().to_owned();

    let mut res = next.call(req).await?;

    let elapsed_ms = started.elapsed().as_millis();
    info!(
        request_id = %id,
        %method,
        %path,
        status = res.status().as_u16(),
        elapsed_ms,
        "request completed"
    );

    let headers = res.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(&format!("app;dur={elapsed_ms}")) {
        headers.insert(SERVER_TIMING_HEADER, value);
    }

    Ok(res)
}
