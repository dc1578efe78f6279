use crate::{data::guild::GuildRepository, model::guild::CreateGuildParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_guild_id;
