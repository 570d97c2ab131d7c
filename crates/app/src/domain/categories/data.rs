//! Category Data

use crate::domain::categories::records::CategoryUuid;

/// New Category Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub uuid: CategoryUuid,
    pub name: String,
    pub sort_order: i32,
}

/// Category Update Data
///
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub sort_order: Option<i32>,
}

/// A category's new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPosition {
    pub uuid: CategoryUuid,
    pub sort_order: i32,
}
