use super::*;

/// Tests the role filter used by the admin user listing and the batch jobs.
///
/// Expected: only role `user` accounts, ordered by username
#[tokio::test]
async fn filters_by_role_and_orders_by_username() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .username("zoe")
        .build()
        .await
        .map_err(AppError::DbErr)?;
    factory::user::UserFactory::new(db)
        .username("amy")
        .build()
        .await
        .map_err(AppError::DbErr)?;
    factory::user::create_admin(db).await.map_err(AppError::DbErr)?;

    let users = UserRepository::new(db).get_all_with_role(Role::User).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].username, "amy");
    assert_eq!(users[1].username, "zoe");
    assert!(users.iter().all(|u| u.role == Role::User));

    Ok(())
}
