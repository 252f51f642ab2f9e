//! External command execution.
//!
//! Toolchain invocations are described as templates with `{name}`
//! placeholders. [`CommandRunner`] is the single seam through which the
//! engine touches external processes, so tests substitute a scripted
//! implementation and never invoke real toolchains.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, error, info};

use brewkit_core::{BuildError, BuildResult};

/// Default upper bound on a single toolchain command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(300);

/// Runs one external command described by a template and named arguments.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Substitute `args` into `template`, tokenize, spawn, and wait.
    ///
    /// `Ok(())` means the process ran to completion with a zero exit status;
    /// the real output is always a side-effected file inside `cwd`, never a
    /// return value.
    async fn run(
        &self,
        template: &str,
        args: &BTreeMap<String, String>,
        cwd: &Path,
    ) -> BuildResult<()>;
}

/// [`CommandRunner`] backed by real subprocesses.
pub struct ProcessRunner {
    timeout: Duration,
}

impl ProcessRunner {
    /// Create a runner with the default command timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_COMMAND_TIMEOUT)
    }

    /// Create a runner with an explicit per-command timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        template: &str,
        args: &BTreeMap<String, String>,
        cwd: &Path,
    ) -> BuildResult<()> {
        let line = substitute(template, args)?;
        let argv = tokenize(&line)?;

        let Some((program, rest)) = argv.split_first() else {
            return Err(BuildError::CommandFailed(
                "command template produced an empty command line".to_string(),
            ));
        };

        info!(command = %program, "running toolchain command");
        debug!(command_line = %line, cwd = %cwd.display(), "spawning process");

        let mut command = Command::new(program);
        command.args(rest).current_dir(cwd).kill_on_drop(true);

        let output = match timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                error!(command = %program, "command executable not found");
                return Err(BuildError::CommandExeNotFound(program.clone()));
            }
            Ok(Err(err)) => {
                error!(command = %program, error = %err, "failed to spawn command");
                return Err(BuildError::CommandFailed(format!(
                    "failed to spawn {program}: {err}"
                )));
            }
            Err(_) => {
                error!(command = %program, timeout_secs = self.timeout.as_secs(), "command timed out");
                return Err(BuildError::CommandFailed(format!(
                    "{program} timed out after {}s",
                    self.timeout.as_secs()
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let status = output
                .status
                .code()
                .map_or_else(|| "signal".to_string(), |code| code.to_string());
            error!(command = %program, status = %status, stderr = %stderr.trim(), "command failed");
            return Err(BuildError::CommandFailed(format!(
                "{program} exited with status {status}: {}",
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Substitute named arguments into a command template.
///
/// `{name}` is replaced by the corresponding argument; `{{` and `}}` escape
/// literal braces. Referencing a name absent from `args` fails with
/// `COMMAND_ARGUMENT_NOT_FOUND` naming the missing key.
pub fn substitute(template: &str, args: &BTreeMap<String, String>) -> BuildResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => key.push(c),
                        None => {
                            return Err(BuildError::CommandFailed(format!(
                                "unterminated placeholder in command template: {template}"
                            )));
                        }
                    }
                }

                let value = args
                    .get(&key)
                    .ok_or(BuildError::CommandArgumentNotFound(key))?;
                out.push_str(value);
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

/// Tokenize a substituted command line with shell-style quoting rules, so
/// arguments containing spaces survive as single tokens.
pub fn tokenize(line: &str) -> BuildResult<Vec<String>> {
    shlex::split(line).ok_or_else(|| {
        BuildError::CommandFailed(format!("unbalanced quoting in command line: {line}"))
    })
}
