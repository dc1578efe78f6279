pub use super::guild::Entity as Guild;
pub use super::keeper_role::Entity as KeeperRole;
pub use super::player::Entity as Player;
