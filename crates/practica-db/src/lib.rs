pub mod course;
pub mod practice;
pub mod user;
pub mod util;

pub use sea_orm;
