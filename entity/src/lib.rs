pub mod category;
pub mod course;
pub mod prelude;
pub mod review;
pub mod user;
