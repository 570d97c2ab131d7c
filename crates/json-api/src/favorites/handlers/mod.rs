//! Favorite Handlers

pub(crate) mod add;
pub(crate) mod clear;
pub(crate) mod count;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod remove;
pub(crate) mod toggle;

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use platter_app::domain::{
        favorites::records::{FavoriteRecord, FavoriteUuid},
        products::records::ProductUuid,
    };

    use crate::{products::make_product, test_helpers::TEST_USER_UUID};

    pub(in crate::favorites) fn make_favorite(product: ProductUuid) -> FavoriteRecord {
        FavoriteRecord {
            uuid: FavoriteUuid::new(),
            user_uuid: TEST_USER_UUID,
            product: make_product(product),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }
}

#[cfg(test)]
pub(in crate::favorites) use tests::make_favorite;
