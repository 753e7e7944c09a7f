use super::*;

/// Tests creating an account row.
///
/// Expected: Ok(User) with the provided fields and role
#[tokio::test]
async fn creates_account_with_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    let user = repo
        .create(user_params("alice", "alice@example.com", Role::User))
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::User);
    assert!(!user.is_admin());

    Ok(())
}

/// Tests that duplicate emails are rejected by the unique index.
///
/// Expected: Err(Conflict) on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(user_params("alice", "alice@example.com", Role::User))
        .await?;

    let result = repo
        .create(user_params("bob", "alice@example.com", Role::User))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that duplicate usernames are rejected by the unique index.
///
/// Expected: Err(Conflict) on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    repo.create(user_params("alice", "alice@example.com", Role::User))
        .await?;

    let result = repo
        .create(user_params("alice", "alice2@example.com", Role::User))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
