//! Carousel factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::CarouselStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CarouselFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    status: CarouselStatus,
    sort_order: i32,
}

impl<'a> CarouselFactory<'a> {
    /// Defaults to an active slide with sort order `1`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Slide {}", next_id()),
            status: CarouselStatus::Active,
            sort_order: 1,
        }
    }

    pub fn status(mut self, status: CarouselStatus) -> Self {
        self.status = status;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub async fn build(self) -> Result<entity::carousel::Model, DbErr> {
        let now = Utc::now();
        entity::carousel::ActiveModel {
            title: ActiveValue::Set(self.title),
            image_url: ActiveValue::Set("/uploads/slide.png".to_string()),
            status: ActiveValue::Set(self.status),
            sort_order: ActiveValue::Set(self.sort_order),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_carousel(db: &DatabaseConnection) -> Result<entity::carousel::Model, DbErr> {
    CarouselFactory::new(db).build().await
}
