pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_articles_table;
mod m20260301_000003_create_events_table;
mod m20260301_000004_create_albums_table;
mod m20260301_000005_create_works_table;
mod m20260301_000006_create_comments_table;
mod m20260301_000007_create_activities_table;
mod m20260301_000008_create_activity_participants_table;
mod m20260301_000009_create_carousels_table;
mod m20260301_000010_create_announcements_table;
mod m20260301_000011_create_system_settings_table;
mod m20260301_000012_create_materials_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_articles_table::Migration),
            Box::new(m20260301_000003_create_events_table::Migration),
            Box::new(m20260301_000004_create_albums_table::Migration),
            Box::new(m20260301_000005_create_works_table::Migration),
            Box::new(m20260301_000006_create_comments_table::Migration),
            Box::new(m20260301_000007_create_activities_table::Migration),
            Box::new(m20260301_000008_create_activity_participants_table::Migration),
            Box::new(m20260301_000009_create_carousels_table::Migration),
            Box::new(m20260301_000010_create_announcements_table::Migration),
            Box::new(m20260301_000011_create_system_settings_table::Migration),
            Box::new(m20260301_000012_create_materials_table::Migration),
        ]
    }
}
