use serde::{Deserialize, Serialize};

/// A list in GraphQL connection form: `{ "edges": [ { "node": ... } ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

/// A single entry of a [`Connection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Iterate over the wrapped nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &T> {
        self.edges.iter().map(|edge| &edge.node)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<T: Clone> Connection<T> {
    /// Wrap each item as `{ node: item }`, preserving order.
    pub fn from_nodes(nodes: &[T]) -> Self {
        Connection {
            edges: nodes.iter().cloned().map(|node| Edge { node }).collect(),
        }
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Connection { edges: Vec::new() }
    }
}

/// Root fixture record for a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub reviews: Connection<Review>,
    pub review_threads: Connection<ReviewThread>,
}

/// A submitted review and the comments it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u64,
    pub submitted_at: String,
    pub comments: Connection<Comment>,
}

/// A conversation thread anchored to a diff position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewThread {
    pub is_resolved: bool,
    pub comments: Connection<Comment>,
}

/// A single review comment.
///
/// `reply_to` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub author: Author,
    pub body: String,
    pub path: String,
    /// Position within the diff. Not validated; negative values pass through.
    pub position: i64,
    /// ISO-8601 timestamp
    pub created_at: String,
    pub url: String,
    pub reply_to: Option<ReplyTo>,
    pub is_minimized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub login: String,
    pub avatar_url: String,
}

/// Reference to the comment being replied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTo {
    pub id: u64,
}
