// src/models/mod.rs

pub mod class_session;
pub mod session;
pub mod user;
