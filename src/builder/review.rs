use super::comment::{configured_comment, CommentBuilder};
use super::id_sequence::IdSequence;
use super::types::{Comment, Connection, Review};

pub const DEFAULT_SUBMITTED_AT: &str = "2018-12-28T20:40:55Z";

/// Accumulates a submitted review: identifier, timestamp, and comments.
///
/// The identifier defaults to 0; [`PullRequestBuilder`](super::PullRequestBuilder)
/// assigns one from its review sequence before the configuration closure runs.
#[derive(Debug, Clone)]
pub struct ReviewBuilder {
    comment_ids: IdSequence,
    id: u64,
    submitted_at: String,
    comments: Vec<Comment>,
}

impl ReviewBuilder {
    pub fn new() -> Self {
        Self::with_comment_ids(IdSequence::new())
    }

    pub fn with_comment_ids(comment_ids: IdSequence) -> Self {
        Self {
            comment_ids,
            id: 0,
            submitted_at: DEFAULT_SUBMITTED_AT.to_string(),
            comments: Vec::new(),
        }
    }

    pub fn id(&mut self, id: u64) -> &mut Self {
        self.id = id;
        self
    }

    pub fn submitted_at(&mut self, timestamp: impl Into<String>) -> &mut Self {
        self.submitted_at = timestamp.into();
        self
    }

    pub fn add_comment<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CommentBuilder),
    {
        let comment = configured_comment(&self.comment_ids, configure);
        self.comments.push(comment);
        self
    }

    pub fn build(&self) -> Review {
        Review {
            id: self.id,
            submitted_at: self.submitted_at.clone(),
            comments: Connection::from_nodes(&self.comments),
        }
    }
}

impl Default for ReviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let review = ReviewBuilder::new().build();
        assert_eq!(review.id, 0);
        assert_eq!(review.submitted_at, DEFAULT_SUBMITTED_AT);
        assert!(review.comments.is_empty());
    }

    #[test]
    fn test_overrides() {
        let review = ReviewBuilder::new()
            .id(12)
            .submitted_at("2019-03-03T03:03:03Z")
            .build();
        assert_eq!(review.id, 12);
        assert_eq!(review.submitted_at, "2019-03-03T03:03:03Z");
    }

    #[test]
    fn test_comment_ids_increase() {
        let review = ReviewBuilder::new()
            .add_comment(|_| {})
            .add_comment(|_| {})
            .add_comment(|c| {
                c.path("src/lib.rs").position(4);
            })
            .build();
        let ids: Vec<u64> = review.comments.nodes().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(review.comments.edges[2].node.path, "src/lib.rs");
    }

    #[test]
    fn test_build_twice_reflects_new_comments() {
        let mut builder = ReviewBuilder::new();
        builder.add_comment(|_| {});
        let before = builder.build();
        builder.add_comment(|_| {});
        let after = builder.build();
        assert_eq!(before.comments.len(), 1);
        assert_eq!(after.comments.len(), 2);
    }
}
