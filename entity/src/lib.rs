//! SeaORM entity models for the guildkeeper database.
//!
//! Mirrors the schema created by the `migration` crate.

pub mod prelude;

pub mod guild;
pub mod keeper_role;
pub mod player;
