//! Favorite Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductRecord, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Favorite UUID
pub type FavoriteUuid = TypedUuid<FavoriteRecord>;

/// Favorite Record
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteRecord {
    pub uuid: FavoriteUuid,
    pub user_uuid: UserUuid,
    /// Current catalog snapshot of the favorited product.
    pub product: ProductRecord,
    pub created_at: Timestamp,
}
