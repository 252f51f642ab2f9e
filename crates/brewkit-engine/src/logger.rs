//! Run-scoped build log.

use tracing::error;

/// Accumulates critical diagnostic lines for one orchestration run.
///
/// Constructed per request and passed explicitly; there is no process-wide
/// log state. The accumulated text becomes the `debug.log` entry of the
/// output archive.
#[derive(Debug, Default)]
pub struct BuildLog {
    lines: Vec<String>,
}

impl BuildLog {
    /// Create an empty log for a new run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a critical diagnostic line.
    pub fn crit(&mut self, line: impl Into<String>) {
        let line = line.into();
        error!(diagnostic = %line, "build failure recorded");
        self.lines.push(line);
    }

    /// The recorded lines, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Full log content, one diagnostic per line.
    #[must_use]
    pub fn contents(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Whether anything was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
