//! # Jobs API forwarding
//!
//! The GUI talks to the jobs API with same-origin requests under `/api`.
//! When the GUI is hosted by this process rather than by the API itself,
//! every `/api/*` request is relayed to the configured upstream unchanged:
//! method, path, query string, body and the `content-type`/`accept` headers.
//! The upstream's status, `content-type` and body come back as they are.
//!
//! Nothing here interprets jobs; retry/pause semantics stay with the API.

mod forward;
mod upstream;

use actix_web::web::{route, scope};
use actix_web::Scope;

pub use upstream::ApiUpstream;

/// The base path for all forwarded endpoints.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` relaying everything under `/api`.
pub fn configure_routes() -> Scope {
    scope(API_PATH).default_service(route().to(forward::process))
}
