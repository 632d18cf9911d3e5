use super::*;

/// Tests role restriction with name sorting, as used by the staff list.
///
/// Expected: Ok with staff only, sorted by name ascending
#[tokio::test]
async fn restricts_to_roles_sorted_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .name("Zhou")
        .role(Role::Editor)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .name("An")
        .role(Role::Admin)
        .build()
        .await?;
    factory::user::UserFactory::new(db).name("Bo").build().await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&UserListParam {
            roles: Role::STAFF.to_vec(),
            sort_by: UserSortField::Name,
            sort_dir: SortDir::Asc,
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 2);
    assert_eq!(users[0].name, "An");
    assert_eq!(users[1].name, "Zhou");

    Ok(())
}

/// Tests search over email combined with a status filter.
///
/// Expected: Ok with the single banned user whose email matches
#[tokio::test]
async fn searches_email_with_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("poet@club.org")
        .status(UserStatus::Banned)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("poet2@club.org")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .status(UserStatus::Banned)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo
        .get_paginated(&UserListParam {
            search: Some("club.org".to_string()),
            status: Some(UserStatus::Banned),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(users[0].email, "poet@club.org");

    Ok(())
}
