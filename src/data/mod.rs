//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the bot. Repositories use SeaORM entity models internally and return
//! domain models to keep database structures out of the service and command layers.

pub mod guild;
pub mod keeper_role;
pub mod player;

#[cfg(test)]
mod test;
