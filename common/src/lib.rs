//! Types and pure logic shared by the job board pages.
//!
//! Everything here is free of browser APIs so it can be exercised with plain
//! `cargo test`: the wire model returned by the jobs API, query-string
//! handling, and the view models the frontend renders.

pub mod api;
pub mod format;
pub mod jobs;
pub mod model;
pub mod query;
pub mod requests;
pub mod view;
