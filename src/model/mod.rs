//! Request/response DTOs shared by the HTTP handlers.

pub mod api;
pub mod course;
pub mod page;
pub mod review;
