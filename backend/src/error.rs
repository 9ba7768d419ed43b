use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Failures while forwarding a request to the jobs API.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("No jobs API configured; set JOBBOARD_API_UPSTREAM")]
    NoUpstream,

    #[error("Unsupported method: {0}")]
    InvalidMethod(String),

    #[error("Jobs API unreachable: {0}")]
    Upstream(#[source] reqwest::Error),

    #[error("Failed reading jobs API response: {0}")]
    Body(#[source] reqwest::Error),
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::NoUpstream | ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ProxyError::InvalidMethod(_) => StatusCode::BAD_REQUEST,
            ProxyError::Body(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ProxyError::NoUpstream.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            ProxyError::InvalidMethod("BREW".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }
}
