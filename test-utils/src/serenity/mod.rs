//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, so permission and hierarchy logic can be tested
//! without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! let bot_role = create_test_role(111111111, "Bot", Permissions::MANAGE_ROLES.bits(), 10);
//! let member = create_test_member(222222222, 333333333, &[111111111]);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects

pub mod member;
pub mod role;

pub use member::{create_test_member, create_test_member_with_permissions};
pub use role::create_test_role;
