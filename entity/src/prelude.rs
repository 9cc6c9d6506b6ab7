pub use super::category::Entity as Category;
pub use super::course::Entity as Course;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
