//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by catalog domain entity.

pub mod category;
pub mod course;
pub mod review;
pub mod user;
