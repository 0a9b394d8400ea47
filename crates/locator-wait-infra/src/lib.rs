#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Infrastructure adapters crate.

pub mod infra;
pub use infra::*;

pub mod domain {
    pub use locator_wait_domain::domain::*;
}

pub mod usecases {
    pub use locator_wait_usecases::usecases::*;
}
