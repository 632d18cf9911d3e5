use super::*;

/// Tests upsert inserts a new key and overwrites an existing one.
///
/// Expected: one row for the key holding the latest value and type
#[tokio::test]
async fn inserts_then_overwrites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SystemSettingRepository::new(db);
    repo.upsert("max_upload_mb", "5".to_string(), SettingValueType::Int)
        .await?;
    repo.upsert("max_upload_mb", "ten".to_string(), SettingValueType::String)
        .await?;

    let all = repo.get_all().await?;
    assert_eq!(all.len(), 1);

    let setting = repo.find("max_upload_mb").await?.unwrap();
    assert_eq!(setting.value, "ten");
    assert_eq!(setting.value_type, SettingValueType::String);

    Ok(())
}

/// Tests writes made on a transaction vanish when it is dropped uncommitted.
///
/// Expected: key absent after rollback
#[tokio::test]
async fn rolls_back_with_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SystemSetting)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    SystemSettingRepository::new(&txn)
        .upsert("site_name", "Maimang".to_string(), SettingValueType::String)
        .await?;
    txn.rollback().await?;

    assert!(SystemSettingRepository::new(db)
        .find("site_name")
        .await?
        .is_none());

    Ok(())
}
