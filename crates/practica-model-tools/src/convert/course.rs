pub mod course;
pub mod question;
pub mod version;
