use tracing::trace;

use super::id_sequence::IdSequence;
use super::types::{Author, Comment, ReplyTo};

pub const DEFAULT_PATH: &str = "first.txt";
pub const DEFAULT_AUTHOR_LOGIN: &str = "someone";
pub const DEFAULT_AVATAR_URL: &str = "https://avatars3.githubusercontent.com/u/17565?s=32&v=4";
pub const DEFAULT_URL: &str = "https://github.com/atom/github/pull/1829/files#r242224689";
pub const DEFAULT_CREATED_AT: &str = "2018-12-27T17:51:17Z";
pub const DEFAULT_BODY: &str = "Lorem ipsum dolor sit amet, te urbanitas appellantur est.";

/// Accumulates the fields of one review comment.
///
/// Every setter accepts any value without validation and returns the builder
/// so calls can be chained inside a configuration closure.
#[derive(Debug, Clone)]
pub struct CommentBuilder {
    id: u64,
    path: String,
    position: i64,
    author_login: String,
    author_avatar_url: String,
    url: String,
    created_at: String,
    body: String,
    reply_to: Option<ReplyTo>,
    is_minimized: bool,
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            id: 0,
            path: DEFAULT_PATH.to_string(),
            position: 0,
            author_login: DEFAULT_AUTHOR_LOGIN.to_string(),
            author_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            url: DEFAULT_URL.to_string(),
            created_at: DEFAULT_CREATED_AT.to_string(),
            body: DEFAULT_BODY.to_string(),
            reply_to: None,
            is_minimized: false,
        }
    }

    pub fn id(&mut self, id: u64) -> &mut Self {
        self.id = id;
        self
    }

    pub fn minimized(&mut self, minimized: bool) -> &mut Self {
        self.is_minimized = minimized;
        self
    }

    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }

    pub fn position(&mut self, position: i64) -> &mut Self {
        self.position = position;
        self
    }

    pub fn author_login(&mut self, login: impl Into<String>) -> &mut Self {
        self.author_login = login.into();
        self
    }

    pub fn author_avatar_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.author_avatar_url = url.into();
        self
    }

    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    pub fn created_at(&mut self, timestamp: impl Into<String>) -> &mut Self {
        self.created_at = timestamp.into();
        self
    }

    pub fn body(&mut self, text: impl Into<String>) -> &mut Self {
        self.body = text.into();
        self
    }

    /// Mark this comment as a reply to the comment with `id`.
    pub fn reply_to(&mut self, id: u64) -> &mut Self {
        self.reply_to = Some(ReplyTo { id });
        self
    }

    /// Snapshot the current fields. May be called repeatedly.
    pub fn build(&self) -> Comment {
        Comment {
            id: self.id,
            author: Author {
                login: self.author_login.clone(),
                avatar_url: self.author_avatar_url.clone(),
            },
            body: self.body.clone(),
            path: self.path.clone(),
            position: self.position,
            created_at: self.created_at.clone(),
            url: self.url.clone(),
            reply_to: self.reply_to,
            is_minimized: self.is_minimized,
        }
    }
}

/// Build one comment: draw its id from `ids`, then let `configure` override
/// anything, including that id.
pub(crate) fn configured_comment<F>(ids: &IdSequence, configure: F) -> Comment
where
    F: FnOnce(&mut CommentBuilder),
{
    let mut builder = CommentBuilder::new();
    let id = ids.next_id();
    trace!(comment_id = id, "assigned comment id");
    builder.id(id);
    configure(&mut builder);
    builder.build()
}

impl Default for CommentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
