pub mod session;
pub mod status;
