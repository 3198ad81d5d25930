//! API integration tests

pub mod auth_test;
pub mod friends_test;
pub mod users_test;
