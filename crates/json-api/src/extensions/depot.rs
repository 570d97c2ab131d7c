//! Depot access for handlers.
//!
//! The router injects the shared [`State`](crate::state::State) and the auth
//! middleware injects the session's [`UserUuid`]. A missing state is a wiring
//! bug and surfaces as 500; a missing user means the request was anonymous.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};

use platter_app::domain::users::records::UserUuid;

pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_user_uuid(&mut self, user: UserUuid);

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            tracing::error!(
                wanted = std::any::type_name::<T>(),
                "depot is missing injected state"
            );

            StatusError::internal_server_error()
        })
    }

    fn insert_user_uuid(&mut self, user: UserUuid) {
        self.inject(user);
    }

    fn user_uuid_or_401(&self) -> Result<UserUuid, StatusError> {
        self.obtain::<UserUuid>()
            .copied()
            .map_err(|_anonymous| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::StatusCode;
    use uuid::Uuid;

    use crate::{state::State, test_helpers::Mocks};

    use super::*;

    #[test]
    fn missing_state_is_a_server_error() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<Arc<State>>();

        assert!(
            result.is_err_and(|error| error.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500 without injected state"
        );
    }

    #[test]
    fn injected_state_is_found() {
        let mut depot = Depot::new();

        depot.inject(Mocks::new().into_state());

        assert!(depot.obtain_or_500::<Arc<State>>().is_ok());
    }

    #[test]
    fn missing_user_is_unauthorized() {
        let depot = Depot::new();

        let result = depot.user_uuid_or_401();

        assert!(
            result.is_err_and(|error| error.code == StatusCode::UNAUTHORIZED),
            "expected 401 without an authenticated user"
        );
    }

    #[test]
    fn inserted_user_is_returned() {
        let user = UserUuid::from_uuid(Uuid::now_v7());
        let mut depot = Depot::new();

        depot.insert_user_uuid(user);

        assert!(matches!(depot.user_uuid_or_401(), Ok(found) if found == user));
    }
}
