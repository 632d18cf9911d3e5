use super::*;

/// Tests creating a user and finding it by email.
///
/// Expected: Ok with status active; last_login_at unset until touched
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Lin Yi".to_string(),
            email: "lin@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Member,
        })
        .await?;

    assert_eq!(user.status, UserStatus::Active);
    assert!(user.last_login_at.is_none());

    repo.touch_last_login(user.id).await?;
    let found = repo.find_by_email("lin@example.com").await?.unwrap();
    assert_eq!(found.id, user.id);
    assert!(found.last_login_at.is_some());

    Ok(())
}

/// Tests the unique email constraint.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Second".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Member,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
