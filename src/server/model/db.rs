//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application, so handler and service signatures don't import from the
//! generated `entity` crate directly.

/// Type alias for category database model.
pub type CategoryModel = entity::category::Model;

/// Type alias for user database model.
///
/// Users are created by the external auth subsystem; this module only reads
/// them for author pickers and reviewer display fields.
pub type UserModel = entity::user::Model;

/// Type alias for course database model.
///
/// Carries the `rating_sum`/`rating_num` aggregate pair which is only ever
/// updated together with a matching review insert.
pub type CourseModel = entity::course::Model;

/// Type alias for review database model.
pub type ReviewModel = entity::review::Model;
