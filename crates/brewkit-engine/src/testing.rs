//! Scripted [`CommandRunner`] used by unit tests in this crate.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;

use brewkit_core::{BuildError, BuildResult};

use crate::runner::{CommandRunner, substitute, tokenize};

/// A runner that records every invocation instead of spawning processes.
///
/// On success it writes `artifact` to the `{output}` argument, imitating a
/// toolchain's side-effected output file.
pub(crate) struct ScriptedRunner {
    artifact: Option<Vec<u8>>,
    fail_program: Option<String>,
    invocations: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    /// Every command succeeds and the final output file gets `artifact`.
    pub(crate) fn succeeding(artifact: &[u8]) -> Self {
        Self {
            artifact: Some(artifact.to_vec()),
            fail_program: None,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Commands succeed but no output file is ever written.
    pub(crate) fn silent() -> Self {
        Self {
            artifact: None,
            fail_program: None,
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// The named program fails; everything else succeeds.
    pub(crate) fn failing_on(program: &str) -> Self {
        Self {
            artifact: Some(b"artifact".to_vec()),
            fail_program: Some(program.to_string()),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// All recorded argv vectors, in invocation order.
    #[allow(clippy::unwrap_used)] // Safe: test-only helper
    pub(crate) fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.lock().unwrap().clone()
    }

    /// The program name of each invocation, in order.
    pub(crate) fn programs(&self) -> Vec<String> {
        self.invocations()
            .into_iter()
            .filter_map(|argv| argv.into_iter().next())
            .collect()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        template: &str,
        args: &BTreeMap<String, String>,
        _cwd: &Path,
    ) -> BuildResult<()> {
        let line = substitute(template, args)?;
        let argv = tokenize(&line)?;

        let program = argv.first().cloned().unwrap_or_default();
        if let Ok(mut invocations) = self.invocations.lock() {
            invocations.push(argv);
        }

        if self.fail_program.as_deref() == Some(program.as_str()) {
            return Err(BuildError::CommandFailed(format!(
                "{program} exited with status 1: scripted failure"
            )));
        }

        if let Some(artifact) = &self.artifact {
            if let Some(output) = args.get("output") {
                std::fs::write(output, artifact)?;
            }
        }

        Ok(())
    }
}
