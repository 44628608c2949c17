use colored::{ColoredString, Colorize};
use std::fmt::Display;
use std::io::{self, Write};

use crate::domain::entities::{PullResult, PushResult, RepoDescriptor, RepoOutcome, RepoStatus};
use crate::domain::value_objects::BranchInfo;

/// Error tags printed in front of rejected outcomes, one per command.
pub const STATUS_ERROR_TAG: &str = "#zub2MQ";
pub const PULL_ERROR_TAG: &str = "#t5d1OI";
pub const PUSH_ERROR_TAG: &str = "#FU1MPf";

/// Shown for a push that changed nothing. `git push` without `--porcelain`
/// prints this on stderr; the porcelain form does not, so it is supplied here.
pub const PUSH_UP_TO_DATE_LABEL: &str = "Everything up-to-date";
pub const PUSHED_LABEL: &str = "pushed changes";
pub const PULLED_LABEL: &str = "pulled changes";

/// Renders settled outcomes, in the order given, to an output and a
/// diagnostic stream.
pub struct OutcomeDisplay<O, E> {
    out: O,
    err: E,
}

impl OutcomeDisplay<io::Stdout, io::Stderr> {
    /// Write to the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> OutcomeDisplay<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    pub fn print_status(&mut self, outcomes: &[RepoOutcome<RepoStatus>]) -> io::Result<()> {
        for outcome in outcomes {
            let status = match &outcome.result {
                Ok(status) => status,
                Err(e) => {
                    self.print_rejected(STATUS_ERROR_TAG, e)?;
                    continue;
                }
            };

            let name = repo_name(&outcome.repo);
            let branch = branch_label(&status.branch_info);

            if status.has_changes {
                writeln!(self.out, "{} - {} - {}:", name, "has changes".red(), branch)?;
                for line in &status.changed_lines {
                    writeln!(self.out, "  {}", line)?;
                }
            } else {
                writeln!(self.out, "{} - {} - {}", name, "no changes".green(), branch)?;
            }
        }
        self.out.flush()
    }

    pub fn print_pull(&mut self, outcomes: &[RepoOutcome<PullResult>]) -> io::Result<()> {
        for outcome in outcomes {
            let pull = match &outcome.result {
                Ok(pull) => pull,
                Err(e) => {
                    self.print_rejected(PULL_ERROR_TAG, e)?;
                    continue;
                }
            };

            let label = if pull.no_changes {
                pull.output.yellow()
            } else {
                PULLED_LABEL.green()
            };
            writeln!(self.out, "{} - {}", repo_name(&outcome.repo), label)?;

            if !pull.no_changes {
                self.print_indented(&pull.output)?;
            }
        }
        self.out.flush()
    }

    pub fn print_push(&mut self, outcomes: &[RepoOutcome<PushResult>]) -> io::Result<()> {
        for outcome in outcomes {
            let push = match &outcome.result {
                Ok(push) => push,
                Err(e) => {
                    self.print_rejected(PUSH_ERROR_TAG, e)?;
                    continue;
                }
            };

            let label = if push.no_changes {
                PUSH_UP_TO_DATE_LABEL.yellow()
            } else {
                PUSHED_LABEL.green()
            };
            writeln!(self.out, "{} - {}", repo_name(&outcome.repo), label)?;

            if !push.no_changes {
                self.print_indented(&push.output)?;
            }
        }
        self.out.flush()
    }

    fn print_indented(&mut self, text: &str) -> io::Result<()> {
        for line in text.split('\n') {
            writeln!(self.out, "  {}", line)?;
        }
        Ok(())
    }

    fn print_rejected(&mut self, tag: &str, error: &dyn Display) -> io::Result<()> {
        writeln!(self.err, "{} {}", tag, "Internal error".red().bold())?;
        writeln!(self.err, "{}", error)?;
        self.err.flush()
    }
}

/// `name` or `name (alias)`, highlighted.
pub fn repo_name(repo: &RepoDescriptor) -> ColoredString {
    repo.display_name().magenta()
}

fn branch_label(info: &BranchInfo) -> ColoredString {
    if info.is_diverged() {
        info.as_str().red()
    } else {
        info.as_str().normal()
    }
}
