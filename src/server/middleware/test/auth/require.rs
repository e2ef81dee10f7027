use super::*;

/// Tests a valid token of an existing user without permission requirements.
///
/// Expected: Ok(User) matching the token subject
#[tokio::test]
async fn resolves_token_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::create_user(db, organization.id).await?;

    let jwt = JwtService::new(SECRET);
    let headers = bearer(&jwt.issue(user.id, Duration::hours(1)).unwrap());

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = JwtService::new(SECRET);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with a different secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_token_with_foreign_signature() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let user = factory::create_user(db, organization.id).await?;

    let jwt = JwtService::new(SECRET);
    let forged = JwtService::new("another-secret")
        .issue(user.id, Duration::hours(1))
        .unwrap();
    let headers = bearer(&forged);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose subject no longer exists.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let jwt = JwtService::new(SECRET);
    let headers = bearer(&jwt.issue(4242, Duration::hours(1)).unwrap());

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests admin permission for admin and regular users.
///
/// Expected: Ok(User) for the admin, Err(AuthError::AccessDenied) for the regular user
#[tokio::test]
async fn admin_permission_requires_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db).await?;
    let admin = create_admin(db, organization.id).await?;
    let user = factory::create_user(db, organization.id).await?;

    let jwt = JwtService::new(SECRET);
    let admin_headers = bearer(&jwt.issue(admin.id, Duration::hours(1)).unwrap());
    let user_headers = bearer(&jwt.issue(user.id, Duration::hours(1)).unwrap());

    let granted = AuthGuard::new(db, &jwt, &admin_headers)
        .require(&[Permission::Admin])
        .await;
    let denied = AuthGuard::new(db, &jwt, &user_headers)
        .require(&[Permission::Admin])
        .await;

    assert!(granted.unwrap().admin);
    match denied {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got {:?}", other.map(|u| u.id)),
    }

    Ok(())
}
