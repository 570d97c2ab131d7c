//! Basket Item Handlers

pub(crate) mod add;
pub(crate) mod decrement;
pub(crate) mod increment;
pub(crate) mod remove;
pub(crate) mod update;
