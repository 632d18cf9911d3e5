use crate::server::data::system_setting::SystemSettingRepository;
use entity::sea_orm_active_enums::SettingValueType;
use sea_orm::{DbErr, TransactionTrait};
use test_utils::builder::TestBuilder;

mod upsert;
