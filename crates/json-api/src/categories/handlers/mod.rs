//! Category Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::categories::records::CategoryRecord;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod reorder;
pub(crate) mod update;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    pub uuid: Uuid,
    pub name: String,

    /// Position in menus, ascending
    pub sort_order: i32,

    pub created_at: String,
    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        Self {
            uuid: category.uuid.into(),
            name: category.name,
            sort_order: category.sort_order,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

#[cfg(test)]
pub(in crate::categories) fn make_category(
    uuid: platter_app::domain::categories::records::CategoryUuid,
    name: &str,
    sort_order: i32,
) -> CategoryRecord {
    CategoryRecord {
        uuid,
        name: name.to_string(),
        sort_order,
        created_at: jiff::Timestamp::UNIX_EPOCH,
        updated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}
