//! Platter Domain Concerns

pub mod baskets;
pub mod categories;
pub mod favorites;
pub mod products;
pub mod restaurants;
pub mod reviews;
pub mod users;
