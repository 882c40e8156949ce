use tracing::{debug, trace};

use super::id_sequence::IdSequence;
use super::review::ReviewBuilder;
use super::thread::ReviewThreadBuilder;
use super::types::{Connection, PullRequest, Review, ReviewThread};

/// Top-level fixture builder.
///
/// Owns one comment sequence shared by every review and thread it creates,
/// so comment ids are unique across the whole tree, and a separate sequence
/// for review ids. Threads do not consume review ids.
#[derive(Debug, Clone)]
pub struct PullRequestBuilder {
    comment_ids: IdSequence,
    review_ids: IdSequence,
    reviews: Vec<Review>,
    review_threads: Vec<ReviewThread>,
}

impl PullRequestBuilder {
    pub fn new() -> Self {
        Self {
            comment_ids: IdSequence::new(),
            review_ids: IdSequence::new(),
            reviews: Vec::new(),
            review_threads: Vec::new(),
        }
    }

    /// Append a review. Its id is drawn from the review sequence before
    /// `configure` runs, so the closure may still override it.
    pub fn add_review<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ReviewBuilder),
    {
        let mut builder = ReviewBuilder::with_comment_ids(self.comment_ids.clone());
        let id = self.review_ids.next_id();
        trace!(review_id = id, "assigned review id");
        builder.id(id);
        configure(&mut builder);
        self.reviews.push(builder.build());
        self
    }

    pub fn add_review_thread<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut ReviewThreadBuilder),
    {
        let mut builder = ReviewThreadBuilder::with_comment_ids(self.comment_ids.clone());
        configure(&mut builder);
        self.review_threads.push(builder.build());
        self
    }

    pub fn build(&self) -> PullRequest {
        debug!(
            reviews = self.reviews.len(),
            review_threads = self.review_threads.len(),
            "building pull request fixture"
        );
        PullRequest {
            reviews: Connection::from_nodes(&self.reviews),
            review_threads: Connection::from_nodes(&self.review_threads),
        }
    }
}

impl Default for PullRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::comment::{DEFAULT_AUTHOR_LOGIN, DEFAULT_BODY};
    use crate::builder::review::DEFAULT_SUBMITTED_AT;
    use crate::builder::types::Comment;
    use serde_json::json;

    #[test]
    fn test_single_review_single_comment() {
        let pr = PullRequestBuilder::new()
            .add_review(|r| {
                r.add_comment(|c| {
                    c.body("hi");
                });
            })
            .build();

        assert_eq!(pr.reviews.len(), 1);
        assert!(pr.review_threads.is_empty());
        let review = &pr.reviews.edges[0].node;
        assert_eq!(review.id, 1);
        assert_eq!(review.submitted_at, DEFAULT_SUBMITTED_AT);
        let comment = &review.comments.edges[0].node;
        assert_eq!(comment.id, 1);
        assert_eq!(comment.body, "hi");
        assert_eq!(comment.author.login, DEFAULT_AUTHOR_LOGIN);

        let value = serde_json::to_value(&pr).unwrap();
        assert_eq!(value["reviewThreads"], json!({ "edges": [] }));
        let first_review = &value["reviews"]["edges"][0]["node"];
        assert_eq!(first_review["comments"]["edges"][0]["node"]["replyTo"], json!(null));
    }

    #[test]
    fn test_comment_ids_shared_across_reviews_and_threads() {
        let pr = PullRequestBuilder::new()
            .add_review(|r| {
                r.add_comment(|_| {}).add_comment(|_| {});
            })
            .add_review_thread(|t| {
                t.add_comment(|_| {});
            })
            .add_review(|r| {
                r.add_comment(|_| {});
            })
            .build();

        let review_ids: Vec<u64> = pr.reviews.nodes().map(|r| r.id).collect();
        assert_eq!(review_ids, vec![1, 2]);

        let ids = |comments: &Connection<Comment>| -> Vec<u64> {
            comments.nodes().map(|c| c.id).collect()
        };
        assert_eq!(ids(&pr.reviews.edges[0].node.comments), vec![1, 2]);
        assert_eq!(ids(&pr.review_threads.edges[0].node.comments), vec![3]);
        assert_eq!(ids(&pr.reviews.edges[1].node.comments), vec![4]);
    }

    #[test]
    fn test_threads_do_not_consume_review_ids() {
        let pr = PullRequestBuilder::new()
            .add_review_thread(|_| {})
            .add_review_thread(|t| {
                t.resolved();
            })
            .add_review(|_| {})
            .build();

        assert_eq!(pr.reviews.edges[0].node.id, 1);
        let resolved: Vec<bool> = pr.review_threads.nodes().map(|t| t.is_resolved).collect();
        assert_eq!(resolved, vec![false, true]);
    }

    #[test]
    fn test_review_id_override() {
        let pr = PullRequestBuilder::new()
            .add_review(|r| {
                r.id(99);
            })
            .add_review(|_| {})
            .build();
        let ids: Vec<u64> = pr.reviews.nodes().map(|r| r.id).collect();
        assert_eq!(ids, vec![99, 2]);
    }

    #[test]
    fn test_default_comment_body_kept_without_override() {
        let pr = PullRequestBuilder::new()
            .add_review_thread(|t| {
                t.add_comment(|_| {});
            })
            .build();
        let comment = &pr.review_threads.edges[0].node.comments.edges[0].node;
        assert_eq!(comment.body, DEFAULT_BODY);
    }
}
