use super::*;

/// Tests the default ordering is by date ascending.
///
/// Expected: Ok with the earliest date first and deleted activities excluded
#[tokio::test]
async fn orders_by_date_ascending_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::activity::ActivityFactory::new(db)
        .title("Autumn reading")
        .date(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
        .build()
        .await?;
    factory::activity::ActivityFactory::new(db)
        .title("Spring reading")
        .date(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        .build()
        .await?;
    factory::activity::ActivityFactory::new(db)
        .title("Cancelled reading")
        .date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        .deleted()
        .build()
        .await?;

    let repo = ActivityRepository::new(db);
    let (activities, total) = repo.get_paginated(&ActivityListParam::default()).await?;

    assert_eq!(total, 2);
    assert_eq!(activities[0].title, "Spring reading");
    assert_eq!(activities[1].title, "Autumn reading");

    Ok(())
}

/// Tests search, status filter and title sorting combined.
///
/// Expected: Ok with only upcoming matches, sorted by title descending
#[tokio::test]
async fn filters_and_sorts_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::activity::ActivityFactory::new(db)
        .title("Poetry salon")
        .build()
        .await?;
    factory::activity::ActivityFactory::new(db)
        .title("Prose workshop")
        .description("Bring a poetry draft")
        .build()
        .await?;
    factory::activity::ActivityFactory::new(db)
        .title("Poetry night")
        .status(ActivityStatus::Completed)
        .build()
        .await?;

    let repo = ActivityRepository::new(db);
    let (activities, total) = repo
        .get_paginated(&ActivityListParam {
            search: Some("oetry".to_string()),
            status: Some(ActivityStatus::Upcoming),
            sort_by: ActivitySortField::Title,
            sort_dir: SortDir::Desc,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(activities[0].title, "Prose workshop");
    assert_eq!(activities[1].title, "Poetry salon");

    Ok(())
}

/// Tests pagination returns the requested slice and full total.
///
/// Expected: Ok with 2 items on page 2 of 5 activities at 2 per page
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_activity(db).await?;
    }

    let repo = ActivityRepository::new(db);
    let (activities, total) = repo
        .get_paginated(&ActivityListParam {
            page: PageParams::new(Some(2), Some(2)),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 5);
    assert_eq!(activities.len(), 2);

    Ok(())
}

/// Tests search matches the location and ignores letter case.
///
/// Expected: Ok with only the activity held in the library
#[tokio::test]
async fn searches_location_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_activity_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::activity::ActivityFactory::new(db)
        .title("Poetry salon")
        .location("Old Library, room 3")
        .build()
        .await?;
    factory::activity::ActivityFactory::new(db)
        .title("Prose workshop")
        .location("Student center")
        .build()
        .await?;

    let repo = ActivityRepository::new(db);
    let (activities, total) = repo
        .get_paginated(&ActivityListParam {
            search: Some("LIBRARY".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(activities[0].title, "Poetry salon");
    assert_eq!(activities[0].location.as_deref(), Some("Old Library, room 3"));

    Ok(())
}
