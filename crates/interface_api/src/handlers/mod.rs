//! Request handlers

pub mod docs;
pub mod health;
pub mod premium;
