use super::*;

/// Tests the email uniqueness pre-check.
///
/// Expected: true for a registered email, false otherwise
#[tokio::test]
async fn detects_taken_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await
        .map_err(AppError::DbErr)?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("taken@example.com").await?);
    assert!(!repo.email_taken("free@example.com").await?);

    Ok(())
}

/// Tests the username uniqueness pre-check.
///
/// Expected: true for a registered username, false otherwise
#[tokio::test]
async fn detects_taken_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("taken")
        .build()
        .await
        .map_err(AppError::DbErr)?;

    let repo = UserRepository::new(db);

    assert!(repo.username_taken("taken").await?);
    assert!(!repo.username_taken("free").await?);

    Ok(())
}
