//! Fluent builders for pull request review fixtures.
//!
//! Each builder fills every field with a fixed default, lets a configuration
//! closure override any of them, and emits plain records shaped like the
//! GitHub GraphQL response (lists wrapped as `{ edges: [ { node } ] }`).
//!
//! ```
//! use pr_fixtures::builder::pull_request_builder;
//!
//! let pr = pull_request_builder()
//!     .add_review(|r| {
//!         r.add_comment(|c| {
//!             c.body("hi");
//!         });
//!     })
//!     .build();
//!
//! assert_eq!(pr.reviews.edges[0].node.id, 1);
//! assert_eq!(pr.reviews.edges[0].node.comments.edges[0].node.body, "hi");
//! ```

pub mod comment;
pub mod id_sequence;
pub mod pull_request;
pub mod review;
pub mod thread;
pub mod types;

pub use comment::CommentBuilder;
pub use id_sequence::IdSequence;
pub use pull_request::PullRequestBuilder;
pub use review::ReviewBuilder;
pub use thread::ReviewThreadBuilder;
pub use types::{Author, Comment, Connection, Edge, PullRequest, ReplyTo, Review, ReviewThread};

/// A standalone review builder with its own comment sequence.
pub fn review_builder() -> ReviewBuilder {
    ReviewBuilder::new()
}

/// A standalone review thread builder with its own comment sequence.
pub fn review_thread_builder() -> ReviewThreadBuilder {
    ReviewThreadBuilder::new()
}

pub fn pull_request_builder() -> PullRequestBuilder {
    PullRequestBuilder::new()
}
