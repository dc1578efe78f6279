use crate::data::player::PlayerRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_by_name;
mod find_by_names;
mod get_all;
