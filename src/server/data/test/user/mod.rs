use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UserListParam, UserSortField},
    util::pagination::SortDir,
};
use entity::sea_orm_active_enums::{Role, UserStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod super_admin_exists;
