//! Tests for course catalog endpoints.

mod list_courses;

use super::*;
