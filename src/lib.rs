//! Fixture builders for GitHub pull request review data.
//!
//! The [`builder`] module produces records shaped like the GraphQL API's
//! review and review-thread response, [`config`] replays TOML scenario files
//! through those builders, and [`render`] turns the result into JSON.

pub mod builder;
pub mod config;
pub mod render;

pub use builder::{pull_request_builder, review_builder, review_thread_builder};
