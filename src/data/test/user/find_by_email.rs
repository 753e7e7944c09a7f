use super::*;

/// Tests looking up an account by email.
///
/// Expected: Ok(Some(Model)) carrying the stored password hash
#[tokio::test]
async fn finds_existing_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("alice@example.com")
        .build()
        .await
        .map_err(AppError::DbErr)?;

    let found = UserRepository::new(db)
        .find_by_email("alice@example.com")
        .await?;

    let found = found.expect("account should be found");
    assert_eq!(found.id, created.id);
    assert!(!found.password_hash.is_empty());

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
