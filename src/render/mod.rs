use colored::Colorize;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::builder::{Comment, PullRequest};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize fixture: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write fixture file: {0}")]
    FileWrite(#[from] std::io::Error),
}

/// Serialize a pull request fixture to JSON.
pub fn to_json(pr: &PullRequest, pretty: bool) -> Result<String, RenderError> {
    let json = if pretty {
        serde_json::to_string_pretty(pr)?
    } else {
        serde_json::to_string(pr)?
    };
    Ok(json)
}

/// Write the fixture JSON to stdout (default) or to a file.
#[instrument(
    skip(pr),
    fields(reviews = pr.reviews.len(), review_threads = pr.review_threads.len())
)]
pub fn output(
    pr: &PullRequest,
    output_path: Option<&Path>,
    pretty: bool,
) -> Result<(), RenderError> {
    let mut json = to_json(pr, pretty)?;
    json.push('\n');
    match output_path {
        None => {
            debug!("writing fixture to stdout");
            print!("{json}");
            Ok(())
        }
        Some(path) => {
            debug!(path = %path.display(), bytes = json.len(), "writing fixture to file");
            std::fs::write(path, json)?;
            Ok(())
        }
    }
}

/// Human-readable overview of a fixture:
///
/// Pull request fixture: 1 review(s), 1 thread(s), 3 comment(s)
///
/// ═══ Review #1 (2018-12-28T20:40:55Z) ═══
///   • [1] someone on first.txt:0
///
/// ═══ Thread 1: RESOLVED ═══
///   • [3] someone on first.txt:0 ↳ reply to 2 (minimized)
pub fn summary(pr: &PullRequest) -> String {
    let comment_count: usize = pr.reviews.nodes().map(|r| r.comments.len()).sum::<usize>()
        + pr.review_threads.nodes().map(|t| t.comments.len()).sum::<usize>();

    let mut out = format!(
        "Pull request fixture: {} review(s), {} thread(s), {} comment(s)\n",
        pr.reviews.len(),
        pr.review_threads.len(),
        comment_count
    );

    for review in pr.reviews.nodes() {
        out.push_str(&format!(
            "\n═══ Review #{} ({}) ═══\n",
            review.id, review.submitted_at
        ));
        push_comments(&mut out, review.comments.nodes());
    }

    for (index, thread) in pr.review_threads.nodes().enumerate() {
        let state = if thread.is_resolved {
            "RESOLVED".green().bold()
        } else {
            "OPEN".yellow().bold()
        };
        out.push_str(&format!("\n═══ Thread {}: {} ═══\n", index + 1, state));
        push_comments(&mut out, thread.comments.nodes());
    }

    out
}

pub fn print_summary(pr: &PullRequest) {
    eprintln!("{}", summary(pr));
}

fn push_comments<'a>(out: &mut String, comments: impl Iterator<Item = &'a Comment>) {
    let mut any = false;
    for comment in comments {
        any = true;
        let mut line = format!(
            "  • [{}] {} on {}:{}",
            comment.id,
            comment.author.login.bold(),
            comment.path,
            comment.position
        );
        if let Some(reply) = comment.reply_to {
            line.push_str(&format!(" ↳ reply to {}", reply.id));
        }
        if comment.is_minimized {
            line.push_str(&format!(" {}", "(minimized)".dimmed()));
        }
        out.push_str(&line);
        out.push('\n');
    }
    if !any {
        out.push_str("  No comments.\n");
    }
}
