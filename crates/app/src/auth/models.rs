//! Auth data models.

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Session UUID
pub type SessionUuid = TypedUuid<SessionMetadata>;

/// Session metadata persisted in storage. The token itself is never stored.
#[derive(Debug, Clone)]
pub struct SessionMetadata {
    pub uuid: SessionUuid,
    pub user_uuid: UserUuid,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub expires_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New session persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewSession {
    pub uuid: SessionUuid,
    pub user_uuid: UserUuid,
    pub token_hash: String,
    pub expires_at: Option<Timestamp>,
}

/// Session issuance result with the one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub metadata: SessionMetadata,
}
