use super::*;

/// Tests super admin detection used by the startup bootstrap.
///
/// Expected: false with only admins, true once a super admin exists
#[tokio::test]
async fn detects_super_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    factory::user::create_user_with_role(db, Role::Admin).await?;
    assert!(!repo.super_admin_exists().await?);

    factory::user::create_user_with_role(db, Role::SuperAdmin).await?;
    assert!(repo.super_admin_exists().await?);

    Ok(())
}
