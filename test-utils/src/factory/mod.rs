//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::create_guild(&db).await?;
//!     let player = factory::player::PlayerFactory::new(&db)
//!         .player_name("Lanii")
//!         .discord_id("151003631204696064")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild` - Create guild configuration rows
//! - `player` - Create player name to Discord account mappings
//! - `keeper_role` - Create keeper role rows
//! - `helpers` - Shared ID generation

pub mod guild;
pub mod helpers;
pub mod keeper_role;
pub mod player;

pub use guild::create_guild;
pub use keeper_role::create_keeper_role;
pub use player::create_player;
