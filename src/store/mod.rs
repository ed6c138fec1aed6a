//! SQL access, one module per table. Every function takes any SQLite
//! executor so callers can run it on the pool or inside a transaction.

pub mod class_sessions;
pub mod tokens;
pub mod users;
