pub mod practice_session;
