use session_auth::{
    SESSION_ID_LENGTH, SessionError, SessionManager, SessionState, extract_id, mint, verify,
};

use crate::common::{TestUser, memory_manager};

/// Sign-up / sign-in followed by authenticated requests and sign-out.
/// 1. Begins a session for a user record wrapped in SessionState
/// 2. Resolves it twice, as two authenticated requests would
/// 3. Ends it and checks the token no longer resolves
#[tokio::test]
async fn test_full_session_lifecycle() {
    let manager = memory_manager().await;
    let state = SessionState::new(TestUser::new(1));

    let token = manager.begin(&state).await.unwrap();

    for _ in 0..2 {
        let resolved: SessionState<TestUser> = manager.resolve(token.as_str()).await.unwrap();
        assert_eq!(resolved.user, state.user);
        assert_eq!(resolved.start, state.start);
    }

    manager.end(token.as_str()).await.unwrap();
    assert_eq!(
        manager
            .resolve::<SessionState<TestUser>>(token.as_str())
            .await,
        Err(SessionError::NotFound)
    );

    // Signing out again is not an error
    assert!(manager.end(token.as_str()).await.is_ok());
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let manager = memory_manager().await;

    let first = manager.begin(&TestUser::new(1)).await.unwrap();
    let second = manager.begin(&TestUser::new(1)).await.unwrap();
    assert_ne!(first, second);

    manager.end(first.as_str()).await.unwrap();

    let still_active: TestUser = manager.resolve(second.as_str()).await.unwrap();
    assert_eq!(still_active.id, 1);
}

#[tokio::test]
async fn test_token_shape() {
    let manager = memory_manager().await;

    let token = manager.begin(&TestUser::new(9)).await.unwrap();

    // 32-byte ID + 32-byte HMAC-SHA256, unpadded base64url
    assert_eq!(token.as_str().len(), 86);
    assert!(
        token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert!(extract_id(token.as_str(), SESSION_ID_LENGTH).is_ok());
}

#[tokio::test]
async fn test_rejections_are_unauthorized_class() {
    let manager = memory_manager().await;
    let token = manager.begin(&TestUser::new(2)).await.unwrap();

    // Token from a different issuer
    let foreign = mint(SESSION_ID_LENGTH).unwrap();
    let err = manager
        .resolve::<TestUser>(foreign.token.as_str())
        .await
        .unwrap_err();
    assert_eq!(err, SessionError::SignatureMismatch);
    assert!(err.is_unauthorized());

    // Garbage
    let err = manager.resolve::<TestUser>("garbage").await.unwrap_err();
    assert!(err.is_unauthorized());

    // Ended session
    manager.end(token.as_str()).await.unwrap();
    let err = manager
        .resolve::<TestUser>(token.as_str())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_per_session_secret_tokens_verify_only_with_their_secret() {
    let first = mint(SESSION_ID_LENGTH).unwrap();
    let second = mint(SESSION_ID_LENGTH).unwrap();

    assert!(
        verify(first.token.as_str(), &first.secret, SESSION_ID_LENGTH)
            .unwrap()
            .is_valid()
    );
    assert!(
        !verify(first.token.as_str(), &second.secret, SESSION_ID_LENGTH)
            .unwrap()
            .is_valid()
    );
}

#[tokio::test]
async fn test_managers_sharing_store_and_key_interoperate() {
    // Two server processes configured alike can serve each other's sessions
    let issuer = memory_manager().await;
    let peer = SessionManager::new(
        issuer.store().clone(),
        session_auth::SessionSecret::new(b"integration-test-key".to_vec()),
    );

    let token = issuer.begin(&TestUser::new(3)).await.unwrap();
    let user: TestUser = peer.resolve(token.as_str()).await.unwrap();

    assert_eq!(user, TestUser::new(3));
}
