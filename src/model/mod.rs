//! Domain models shared by the data, service and bot layers.
//!
//! Repositories convert SeaORM entity models into these types at their boundary so that
//! services and command handlers never depend on database structures.

pub mod battle;
pub mod gameinfo;
pub mod guild;
pub mod player;
