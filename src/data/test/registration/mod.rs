use crate::{
    data::registration::RegistrationRepository, error::AppError,
    model::registration::UpsertRegistrationParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_external_id;
mod find_by_user_id;
mod get_all;
mod upsert;
