pub mod flash;
pub mod user;
