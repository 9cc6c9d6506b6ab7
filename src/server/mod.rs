//! Server application core modules.
//!
//! This module contains all server-side functionality for the coursehub application,
//! including HTTP routing, session-backed viewer identity, database operations over the
//! course catalog, and review submission with aggregate rating maintenance.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
