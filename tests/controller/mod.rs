//! Tests for HTTP controller endpoints.
//!
//! These tests call the handler functions directly with a constructed session
//! and in-memory database, verifying response status, redirect targets, and
//! the rendered view DTOs.

mod course;

use coursehub_test_utils::prelude::*;

use crate::util::TestSetupExt;
