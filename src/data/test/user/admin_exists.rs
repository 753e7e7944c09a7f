use super::*;

/// Tests detecting when an admin account exists.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_admin(db).await.map_err(AppError::DbErr)?;

    assert!(UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests the empty-database bootstrap scenario.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_no_admins() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests that regular accounts do not count as admins.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_with_only_regular_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await.map_err(AppError::DbErr)?;
    factory::user::create_user(db).await.map_err(AppError::DbErr)?;

    assert!(!UserRepository::new(db).admin_exists().await?);

    Ok(())
}
