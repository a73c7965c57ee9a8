pub mod resource;
pub mod resource_comment;
pub mod user;
pub mod week;
pub mod week_comment;

pub use resource::Entity as Resource;
pub use resource_comment::Entity as ResourceComment;
pub use user::Entity as User;
pub use week::Entity as Week;
pub use week_comment::Entity as WeekComment;
