//! Reorder Categories Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use platter_app::domain::categories::data::CategoryPosition;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryPositionRequest {
    pub uuid: Uuid,
    pub sort_order: i32,
}

/// Reorder Categories Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReorderCategoriesRequest {
    pub categories: Vec<CategoryPositionRequest>,
}

/// Reorder Categories Handler
///
/// Applies every position or none of them.
#[endpoint(
    tags("categories"),
    summary = "Reorder Categories",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Categories reordered"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ReorderCategoriesRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let positions = json
        .into_inner()
        .categories
        .into_iter()
        .map(|position| CategoryPosition {
            uuid: position.uuid.into(),
            sort_order: position.sort_order,
        })
        .collect();

    state
        .app
        .categories
        .reorder_categories(positions)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
