//! Business logic services.
//!
//! Services coordinate between repositories and hold the rules the handlers
//! rely on: catalog search and creation, review guards and aggregates, and
//! uploaded-image persistence.

pub mod catalog;
pub mod image;
pub mod review;
