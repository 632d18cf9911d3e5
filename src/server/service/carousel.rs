//! Homepage carousel management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::carousel::CarouselRepository,
    error::AppError,
    model::site::{Carousel, CarouselListParam, CreateCarouselParam, UpdateCarouselParam},
    util::pagination::Page,
};

pub struct CarouselService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarouselService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active slides in display order.
    pub async fn list_active(&self) -> Result<Vec<Carousel>, AppError> {
        Ok(CarouselRepository::new(self.db).get_active().await?)
    }

    pub async fn list(&self, param: &CarouselListParam) -> Result<Page<Carousel>, AppError> {
        let (carousels, total) = CarouselRepository::new(self.db).get_paginated(param).await?;

        Ok(Page::new(carousels, total, param.page))
    }

    pub async fn create(&self, param: CreateCarouselParam) -> Result<Carousel, AppError> {
        Ok(CarouselRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, id: i32, param: UpdateCarouselParam) -> Result<Carousel, AppError> {
        CarouselRepository::new(self.db)
            .update(id, param)
            .await?
            .ok_or_else(carousel_not_found)
    }

    /// Moves a slide to a new display position. Positions start at 1.
    pub async fn update_order(&self, id: i32, order: i32) -> Result<Carousel, AppError> {
        if order < 1 {
            return Err(AppError::BadRequest("order must be at least 1".to_string()));
        }

        self.update(
            id,
            UpdateCarouselParam {
                sort_order: Some(order),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CarouselRepository::new(self.db).delete(id).await? {
            return Err(carousel_not_found());
        }

        Ok(())
    }
}

fn carousel_not_found() -> AppError {
    AppError::NotFound("Carousel not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::CarouselStatus;
    use test_utils::{builder::TestBuilder, factory::carousel::CarouselFactory};

    /// Tests the public list holds active slides sorted by order.
    ///
    /// Expected: inactive slide excluded; order 1 before order 3
    #[tokio::test]
    async fn lists_active_slides_in_order() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Carousel)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let third = CarouselFactory::new(db).sort_order(3).build().await?;
        let first = CarouselFactory::new(db).sort_order(1).build().await?;
        CarouselFactory::new(db)
            .status(CarouselStatus::Inactive)
            .build()
            .await?;

        let slides = CarouselService::new(db).list_active().await?;

        assert_eq!(
            slides.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![first.id, third.id]
        );

        Ok(())
    }

    /// Tests reordering validates the position.
    ///
    /// Expected: order 0 rejected, order 5 stored
    #[tokio::test]
    async fn updates_order() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Carousel)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let slide = CarouselFactory::new(db).build().await?;
        let service = CarouselService::new(db);

        assert!(matches!(
            service.update_order(slide.id, 0).await,
            Err(AppError::BadRequest(_))
        ));
        assert_eq!(service.update_order(slide.id, 5).await?.sort_order, 5);
        assert!(matches!(
            service.update_order(999, 2).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
