mod config;
mod error;
mod services;

use crate::config::Config;
use crate::services::proxy::ApiUpstream;
use actix_web::http::header;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled GUI. Paths that are not bundle files (`/jobs`,
/// `/jobs/{job_id}`, ...) get `index.html`; the app routes on the path.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

async fn redirect_to_jobs() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/jobs"))
        .finish()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = config.gui_url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    match &config.api_upstream {
        Some(base) => info!("Forwarding /api to {}", base),
        None => warn!("JOBBOARD_API_UPSTREAM not set; /api requests will answer 502"),
    }
    let upstream = web::Data::new(ApiUpstream::new(config.api_upstream.clone()));

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(upstream.clone())
            .route("/", web::get().to(redirect_to_jobs))
            .service(services::proxy::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{body::to_bytes, test};

    static BUNDLE: Dir = include_dir!("$CARGO_MANIFEST_DIR/tests/fixtures/dist");

    #[actix_web::test]
    async fn root_redirects_to_jobs_list() {
        let app = test::init_service(App::new().route("/", web::get().to(redirect_to_jobs))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/jobs");
    }

    #[actix_web::test]
    async fn gui_paths_fall_back_to_index() {
        for path in ["/jobs", "/jobs/abc", "/jobs/abc/"] {
            let resp = serve_from(&BUNDLE, path);
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers().get(header::CONTENT_TYPE).unwrap(),
                "text/html; charset=utf-8"
            );
            let body = to_bytes(resp.into_body()).await.unwrap();
            assert!(String::from_utf8_lossy(&body).contains("<title>Jobs</title>"));
        }
    }

    #[actix_web::test]
    async fn bundle_files_get_their_mime_type() {
        let resp = serve_from(&BUNDLE, "/styles.css");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "text/css");
    }
}
