use super::*;

/// Tests status and type filters with sorting by views.
///
/// Expected: Ok with approved poetry only, most viewed first
#[tokio::test]
async fn filters_and_sorts_by_views() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let quiet = factory::work::WorkFactory::new(db, author.id)
        .status(WorkStatus::Approved)
        .views(3)
        .build()
        .await?;
    let popular = factory::work::WorkFactory::new(db, author.id)
        .status(WorkStatus::Approved)
        .views(40)
        .build()
        .await?;
    factory::work::WorkFactory::new(db, author.id)
        .status(WorkStatus::Approved)
        .work_type(WorkType::Novel)
        .views(99)
        .build()
        .await?;
    factory::work::WorkFactory::new(db, author.id).build().await?;

    let repo = WorkRepository::new(db);
    let (works, total) = repo
        .get_paginated(&WorkListParam {
            status: Some(WorkStatus::Approved),
            work_type: Some(WorkType::Poetry),
            sort_by: WorkSortField::Views,
            sort_dir: SortDir::Desc,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(works[0].id, popular.id);
    assert_eq!(works[1].id, quiet.id);
    assert_eq!(works[0].author.as_ref().unwrap().id, author.id);

    Ok(())
}

/// Tests search over title and content plus the author filter.
///
/// Expected: Ok with the single matching work by the given author
#[tokio::test]
async fn searches_by_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::work::WorkFactory::new(db, author.id)
        .title("River at dusk")
        .build()
        .await?;
    factory::work::WorkFactory::new(db, author.id)
        .content("the river again")
        .build()
        .await?;
    factory::work::WorkFactory::new(db, other.id)
        .title("River song")
        .build()
        .await?;

    let repo = WorkRepository::new(db);
    let (works, total) = repo
        .get_paginated(&WorkListParam {
            search: Some("river".to_string()),
            author_id: Some(author.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert!(works.iter().all(|w| w.author_id == author.id));

    Ok(())
}

/// Tests search ignores letter case in both the term and the stored text.
///
/// Expected: Ok with the mixed-case title and the lowercase content match
#[tokio::test]
async fn search_ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_work_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::work::WorkFactory::new(db, author.id)
        .title("Spring Poem")
        .build()
        .await?;
    factory::work::WorkFactory::new(db, author.id)
        .content("a quiet poem about rain")
        .build()
        .await?;
    factory::work::WorkFactory::new(db, author.id)
        .title("Winter essay")
        .content("no verse here")
        .build()
        .await?;

    let repo = WorkRepository::new(db);
    let (_, total) = repo
        .get_paginated(&WorkListParam {
            search: Some("POEM".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);

    Ok(())
}
