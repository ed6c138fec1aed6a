pub mod identity_service;
pub mod schedule_service;
pub mod session_service;
