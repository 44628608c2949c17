use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// Command executor errors
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Failed to run '{command}' in {}: {source}", .cwd.display())]
    SpawnFailed {
        command: String,
        cwd: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed in {} ({}): {stderr}", .cwd.display(), exit_code_text(.exit_code))]
    CommandFailed {
        command: String,
        cwd: PathBuf,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

fn exit_code_text(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Configuration for command execution
#[derive(Debug, Clone, Default)]
pub struct ExecutionConfig {
    /// Working directory for command execution
    pub working_directory: Option<PathBuf>,

    /// Echo the command line and its output to stderr
    pub verbose: bool,
}

impl ExecutionConfig {
    /// Create a new execution config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set working directory
    pub fn with_working_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Set verbose echo
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Command executor for running external processes
pub struct CommandExecutor;

impl CommandExecutor {
    /// Run `program args...` and return its standard output with trailing
    /// whitespace removed.
    ///
    /// A non-zero exit status is an error carrying the captured stderr. The
    /// verbose echo never changes the returned text.
    pub async fn execute(
        program: &str,
        args: &[&str],
        config: &ExecutionConfig,
    ) -> Result<String, ProcessError> {
        if program.trim().is_empty() {
            return Err(ProcessError::InvalidCommand(
                "Command is empty".to_string(),
            ));
        }

        let command_line = Self::command_line(program, args);
        let cwd = match &config.working_directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_default(),
        };

        let mut cmd = TokioCommand::new(program);
        cmd.args(args)
            .current_dir(&cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        // output() drains both pipes concurrently
        let output = cmd.output().await.map_err(|source| ProcessError::SpawnFailed {
            command: command_line.clone(),
            cwd: cwd.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim_end().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();

        tracing::debug!(
            command = %command_line,
            cwd = %cwd.display(),
            status = ?output.status.code(),
            "command finished"
        );

        if config.verbose {
            write_stderr_block(&Self::echo_block(&command_line, &cwd, &stdout, &stderr));
        }

        if !output.status.success() {
            return Err(ProcessError::CommandFailed {
                command: command_line,
                cwd,
                exit_code: output.status.code(),
                stderr,
            });
        }

        Ok(stdout)
    }

    /// The verbose echo of one finished command: the command line with its
    /// directory, then its stdout and stderr indented beneath it.
    pub fn echo_block(command_line: &str, cwd: &Path, stdout: &str, stderr: &str) -> String {
        let location = format!("({})", cwd.display());
        let mut block = format!("{} {} {}\n", "$".dimmed(), command_line, location.dimmed());
        for line in stdout.lines() {
            block.push_str(&format!("  {}\n", line));
        }
        for line in stderr.lines() {
            block.push_str(&format!("  {}\n", line.dimmed()));
        }
        block
    }

    /// Render a command line for messages.
    pub fn command_line(program: &str, args: &[&str]) -> String {
        if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        }
    }
}

/// Write a multi-line diagnostic to stderr in one locked write, so blocks
/// from concurrent repositories never interleave.
pub fn write_stderr_block(block: &str) {
    let mut stderr = std::io::stderr().lock();
    // Diagnostics only; a closed stderr must not fail the command.
    let _ = stderr.write_all(block.as_bytes());
    let _ = stderr.flush();
}
