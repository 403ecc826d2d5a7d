pub(crate) mod courses;
pub(crate) mod error;
pub(crate) mod practice;
pub(crate) mod swagger;
pub(crate) mod users;
