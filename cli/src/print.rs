//! Print host backed by the desktop's default browser.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use resumekit::{PrintHost, PrintOutcome};

/// Default document opener for the current platform.
fn default_opener() -> &'static str {
    #[cfg(target_os = "windows")]
    return "explorer";

    #[cfg(target_os = "macos")]
    return "open";

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    return "xdg-open";
}

/// Writes the printable document to disk and opens it with the system opener.
///
/// The document prints itself on load, so the browser shows its print dialog
/// where the user can pick "Save as PDF".
pub struct SystemPrintHost {
    dir: PathBuf,
    opener: String,
    last_document: Option<PathBuf>,
}

impl SystemPrintHost {
    /// Create a print host that stages documents in the temp directory.
    pub fn new() -> Self {
        Self {
            dir: env::temp_dir(),
            opener: default_opener().to_string(),
            last_document: None,
        }
    }

    /// Stage documents in `dir` instead of the temp directory.
    #[cfg(test)]
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = dir.into();
        self
    }

    /// Use a custom opener program.
    pub fn with_opener(mut self, opener: impl Into<String>) -> Self {
        self.opener = opener.into();
        self
    }

    /// Path of the most recently staged document.
    pub fn last_document(&self) -> Option<&Path> {
        self.last_document.as_deref()
    }

    fn stage(&self, html: &str) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("resumekit-print-{}.html", std::process::id()));
        fs::write(&path, html)?;
        Ok(path)
    }
}

impl Default for SystemPrintHost {
    fn default() -> Self {
        Self::new()
    }
}

impl PrintHost for SystemPrintHost {
    fn open_printable_document(&mut self, html: &str) -> PrintOutcome {
        let path = match self.stage(html) {
            Ok(path) => path,
            Err(e) => {
                return PrintOutcome::Blocked {
                    reason: format!("cannot stage printable document: {}", e),
                }
            }
        };
        self.last_document = Some(path.clone());

        log::debug!("Opening {} with {}", path.display(), self.opener);
        let status = Command::new(&self.opener)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match status {
            Ok(status) if status.success() => PrintOutcome::Opened,
            Ok(status) => PrintOutcome::Blocked {
                reason: format!("{} exited with {}", self.opener, status),
            },
            Err(e) => PrintOutcome::Blocked {
                reason: format!("cannot launch {}: {}", self.opener, e),
            },
        }
    }
}
