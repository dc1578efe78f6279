use crate::data::keeper_role::KeeperRoleRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod delete_by_guild_id;
mod get_by_guild_id;
