//! Auth service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use sqlx::PgPool;
use tracing::warn;

use crate::{
    auth::{
        AuthServiceError, IssuedSession, NewSession, SessionMetadata, SessionUuid,
        format_session_token, generate_session_secret, hash_session_token, parse_session_token,
        repository::PgAuthRepository,
    },
    domain::users::records::UserUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new session token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::UnknownUser`] when the user does not exist,
    /// or a storage error if the insert fails.
    pub async fn issue_session(
        &self,
        user: UserUuid,
        expires_at: Option<Timestamp>,
    ) -> Result<IssuedSession, AuthServiceError> {
        let secret = generate_session_secret();
        let token = format_session_token(&secret);

        let metadata = self
            .repository
            .create_session(&NewSession {
                uuid: SessionUuid::new(),
                user_uuid: user,
                token_hash: hash_session_token(&token),
                expires_at,
            })
            .await?;

        Ok(IssuedSession { token, metadata })
    }

    /// Revoke a session. Returns `None` if it was unknown or already revoked.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_session(
        &self,
        session: SessionUuid,
    ) -> Result<Option<SessionMetadata>, AuthServiceError> {
        Ok(self.repository.revoke_session(session).await?)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError> {
        parse_session_token(bearer_token).map_err(|_malformed| AuthServiceError::NotFound)?;

        let hash = hash_session_token(bearer_token);

        let user = self
            .repository
            .find_user_by_token_hash(&hash)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        if let Err(error) = self.repository.touch_session(&hash).await {
            warn!("failed to record session use: {error}");
        }

        Ok(user)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the user behind a bearer token.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserUuid, AuthServiceError>;
}
