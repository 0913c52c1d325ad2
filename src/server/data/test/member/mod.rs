use crate::server::{
    data::member::MemberRepository,
    model::member::{Address, CreateMemberParam, UpdateMemberParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_name;
mod update;
