use super::*;

/// Tests the guard with a logged-in account and no extra permissions.
///
/// Expected: Ok(User) for any authenticated account
#[tokio::test]
async fn allows_authenticated_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let resolved = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests the guard without a session user.
///
/// Expected: Err(AuthError::AuthenticationRequired)
#[tokio::test]
async fn rejects_anonymous_caller() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationRequired))
    ));

    Ok(())
}

/// Tests the guard with a session pointing at a deleted account.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_dangling_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests the admin permission against a regular account.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_regular_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await.map_err(AppError::DbErr)?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the admin permission against an admin account.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_parking_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await.map_err(AppError::DbErr)?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(resolved.id, admin.id);

    Ok(())
}
