use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::builder::{CommentBuilder, PullRequest, PullRequestBuilder};

/// File picked up from the working directory when no scenario is given.
pub const DEFAULT_CONFIG_FILE: &str = ".pr-fixtures.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read scenario file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A fixture scenario loaded from TOML.
///
/// Every field is optional; anything left out keeps the builder default.
/// An empty file describes a pull request with no reviews and no threads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub reviews: Vec<ReviewConfig>,

    #[serde(default)]
    pub threads: Vec<ThreadConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewConfig {
    /// Overrides the id drawn from the review sequence
    pub id: Option<u64>,
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub comments: Vec<CommentConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThreadConfig {
    #[serde(default)]
    pub resolved: bool,
    #[serde(default)]
    pub comments: Vec<CommentConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentConfig {
    /// Overrides the id drawn from the shared comment sequence
    pub id: Option<u64>,
    pub body: Option<String>,
    pub path: Option<String>,
    pub position: Option<i64>,
    pub author_login: Option<String>,
    pub author_avatar_url: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<String>,
    pub reply_to: Option<u64>,
    pub minimized: Option<bool>,
}

impl Config {
    /// Load `.pr-fixtures.toml` from the current directory.
    /// Returns an empty scenario if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_or_default(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load `path` if it exists, otherwise return an empty scenario.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if path.exists() {
            Self::load_from(path)
        } else {
            debug!(
                path = %path.display(),
                "no scenario file found, using empty scenario"
            );
            Ok(Config::default())
        }
    }

    #[instrument]
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents)?;
        debug!(
            reviews = config.reviews.len(),
            threads = config.threads.len(),
            "loaded scenario"
        );
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Replay the scenario through a [`PullRequestBuilder`]: reviews first,
    /// then threads, each in file order.
    pub fn build_pull_request(&self) -> PullRequest {
        let mut builder = PullRequestBuilder::new();

        for review in &self.reviews {
            builder.add_review(|r| {
                if let Some(id) = review.id {
                    r.id(id);
                }
                if let Some(submitted_at) = &review.submitted_at {
                    r.submitted_at(submitted_at.as_str());
                }
                for comment in &review.comments {
                    r.add_comment(|c| comment.apply(c));
                }
            });
        }

        for thread in &self.threads {
            builder.add_review_thread(|t| {
                if thread.resolved {
                    t.resolved();
                }
                for comment in &thread.comments {
                    t.add_comment(|c| comment.apply(c));
                }
            });
        }

        builder.build()
    }
}

impl CommentConfig {
    fn apply(&self, builder: &mut CommentBuilder) {
        if let Some(id) = self.id {
            builder.id(id);
        }
        if let Some(body) = &self.body {
            builder.body(body.as_str());
        }
        if let Some(path) = &self.path {
            builder.path(path.as_str());
        }
        if let Some(position) = self.position {
            builder.position(position);
        }
        if let Some(login) = &self.author_login {
            builder.author_login(login.as_str());
        }
        if let Some(avatar_url) = &self.author_avatar_url {
            builder.author_avatar_url(avatar_url.as_str());
        }
        if let Some(url) = &self.url {
            builder.url(url.as_str());
        }
        if let Some(created_at) = &self.created_at {
            builder.created_at(created_at.as_str());
        }
        if let Some(reply_to) = self.reply_to {
            builder.reply_to(reply_to);
        }
        if let Some(minimized) = self.minimized {
            builder.minimized(minimized);
        }
    }
}
