pub mod course;
pub mod practice;
pub mod user;
