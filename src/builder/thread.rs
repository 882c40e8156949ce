use super::comment::{configured_comment, CommentBuilder};
use super::id_sequence::IdSequence;
use super::types::{Comment, Connection, ReviewThread};

/// Accumulates a review thread: a resolved flag and its comments.
#[derive(Debug, Clone)]
pub struct ReviewThreadBuilder {
    comment_ids: IdSequence,
    is_resolved: bool,
    comments: Vec<Comment>,
}

impl ReviewThreadBuilder {
    /// A standalone thread builder with its own comment sequence.
    pub fn new() -> Self {
        Self::with_comment_ids(IdSequence::new())
    }

    /// A thread builder drawing comment ids from `comment_ids`.
    pub fn with_comment_ids(comment_ids: IdSequence) -> Self {
        Self {
            comment_ids,
            is_resolved: false,
            comments: Vec::new(),
        }
    }

    pub fn resolved(&mut self) -> &mut Self {
        self.is_resolved = true;
        self
    }

    /// Append a comment configured by `configure`. Comments keep call order.
    pub fn add_comment<F>(&mut self, configure: F) -> &mut Self
    where
        F: FnOnce(&mut CommentBuilder),
    {
        let comment = configured_comment(&self.comment_ids, configure);
        self.comments.push(comment);
        self
    }

    pub fn build(&self) -> ReviewThread {
        ReviewThread {
            is_resolved: self.is_resolved,
            comments: Connection::from_nodes(&self.comments),
        }
    }
}

impl Default for ReviewThreadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
