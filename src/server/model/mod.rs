//! Server application models and type definitions.
//!
//! Data models for the server application: application state, database model type
//! aliases, pagination metadata, and typed session slots.

pub mod app;
pub mod db;
pub mod page;
pub mod session;
