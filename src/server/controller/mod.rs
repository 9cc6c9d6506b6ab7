//! HTTP request handlers.
//!
//! Handlers are stateless functions of the incoming request plus
//! [`AppState`](crate::server::model::app::AppState): they extract
//! parameters, call into services and repositories, and produce a rendered
//! view DTO or a redirect with a flash notice.

pub mod course;
pub mod review;
pub mod util;
