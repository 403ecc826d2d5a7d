pub mod course;
pub mod course_question;
pub mod course_version;
pub mod question;
