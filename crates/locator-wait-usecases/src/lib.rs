#![deny(clippy::all)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Use-case orchestration crate.

pub mod usecases;
pub use usecases::*;

pub mod domain {
    pub use locator_wait_domain::domain::*;
}
