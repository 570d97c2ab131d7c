//! Review Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Review UUID
pub type ReviewUuid = TypedUuid<ReviewRecord>;

/// Review Record
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub uuid: ReviewUuid,
    pub user_uuid: UserUuid,
    /// Author's display name.
    pub user_name: String,
    pub product_uuid: ProductUuid,
    pub product_name: String,
    /// Stars, `1..=5`.
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
