use crate::error::ProxyError;
use crate::services::proxy::upstream::ApiUpstream;
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};

/// Request headers relayed to the upstream. Everything else, hop-by-hop
/// headers included, stays behind.
const FORWARDED_REQUEST_HEADERS: [&str; 2] = ["content-type", "accept"];

/// Actix web handler for every route under `/api`.
///
/// # Returns
/// - The upstream's status and body, with its `content-type`.
/// - `502 Bad Gateway` when no upstream is configured or it cannot be reached.
pub async fn process(
    req: HttpRequest,
    body: web::Bytes,
    upstream: web::Data<ApiUpstream>,
) -> Result<HttpResponse, ProxyError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| req.path());
    let target = upstream
        .target_url(path_and_query)
        .ok_or(ProxyError::NoUpstream)?;

    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .map_err(|_| ProxyError::InvalidMethod(req.method().to_string()))?;
    debug!("{} {} -> {}", method, path_and_query, target);

    let mut outgoing = upstream.client.request(method, &target);
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = req.headers().get(name).and_then(|v| v.to_str().ok()) {
            outgoing = outgoing.header(name, value);
        }
    }
    if !body.is_empty() {
        outgoing = outgoing.body(body.to_vec());
    }

    let response = outgoing.send().await.map_err(|e| {
        warn!("Forwarding {} failed: {}", target, e);
        ProxyError::Upstream(e)
    })?;

    let status = StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = response.bytes().await.map_err(ProxyError::Body)?;

    let mut relayed = HttpResponse::build(status);
    if let Some(content_type) = content_type {
        relayed.content_type(content_type);
    }
    Ok(relayed.body(bytes.to_vec()))
}
