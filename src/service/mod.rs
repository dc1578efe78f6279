//! Business logic between the command handlers and the repositories.
//!
//! Services take a database connection (and, where needed, an external client) and
//! return domain models or `AppError`. Command handlers never touch repositories
//! directly.

pub mod battle;
pub mod gameinfo;
pub mod guild;
pub mod keeper;
pub mod permission;
pub mod player;
