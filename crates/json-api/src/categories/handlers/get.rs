//! Get Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    categories::{errors::into_status_error, handlers::CategoryResponse},
    extensions::*,
    state::State,
};

/// Get Category Handler
#[endpoint(
    tags("categories"),
    summary = "Get Category",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    category: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<CategoryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = state
        .app
        .categories
        .get_category(category.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(category.into()))
}
