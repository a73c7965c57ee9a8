pub mod admin;
pub mod resource;
pub mod student;
pub mod week;
