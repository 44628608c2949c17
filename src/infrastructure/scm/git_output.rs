//! Parsers for git's human-oriented text output.
//!
//! These are exact-match heuristics over git's current wording. They are kept
//! free of I/O so they can be swapped for porcelain formats later without
//! touching the callers.

use regex::Regex;
use std::sync::OnceLock;

use crate::domain::entities::{PullResult, PushResult};
use crate::domain::value_objects::BranchInfo;

/// What `git pull` prints when there is nothing to pull.
pub const PULL_UP_TO_DATE: &str = "Already up to date.";

/// Prefix of the remote header line in `git push --porcelain` output.
pub const PUSH_REMOTE_PREFIX: &str = "To ";

/// Final line of `git push --porcelain` output.
pub const PUSH_DONE_MARKER: &str = "Done";

/// Suffix of a porcelain ref line that did not change.
pub const PUSH_UP_TO_DATE_SUFFIX: &str = "[up to date]";

/// Marker of the checked-out branch in `git branch -vv`.
pub const CURRENT_BRANCH_MARKER: &str = "* ";

fn bracket_regex() -> &'static Regex {
    static BRACKET: OnceLock<Regex> = OnceLock::new();
    BRACKET.get_or_init(|| Regex::new(r"\[[^\]]+\]").expect("bracket pattern is valid"))
}

/// Split `git status --short` output into its non-empty lines.
pub fn parse_status_lines(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The `git branch -vv` line of the checked-out branch.
pub fn find_current_branch(output: &str) -> Option<&str> {
    output
        .lines()
        .find(|line| line.starts_with(CURRENT_BRANCH_MARKER))
}

/// First bracketed segment of a branch line, brackets included.
pub fn extract_branch_info(line: &str) -> Option<BranchInfo> {
    bracket_regex()
        .find(line)
        .map(|found| BranchInfo::new(found.as_str()))
}

/// Interpret `git pull` output.
pub fn parse_pull_output(output: &str) -> PullResult {
    PullResult {
        no_changes: output == PULL_UP_TO_DATE,
        output: output.to_string(),
    }
}

/// Interpret `git push --porcelain` output.
///
/// Nothing was pushed when every ref line ends in `[up to date]`. With no ref
/// lines at all this holds vacuously. The returned output drops the final
/// line, which is normally `Done`.
///
/// Without `--porcelain` a no-op push prints nothing on stdout, which is why
/// the porcelain form is used and the friendly label is synthesized by the
/// presenter.
pub fn parse_push_output(output: &str) -> PushResult {
    let lines: Vec<&str> = output.split('\n').collect();

    let no_changes = lines
        .iter()
        .filter(|line| !line.starts_with(PUSH_REMOTE_PREFIX) && **line != PUSH_DONE_MARKER)
        .all(|line| line.ends_with(PUSH_UP_TO_DATE_SUFFIX));

    let kept = &lines[..lines.len().saturating_sub(1)];

    PushResult {
        output: kept.join("\n"),
        no_changes,
    }
}
