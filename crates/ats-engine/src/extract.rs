//! Text extraction via the `pdftotext` binary (poppler-utils).
//!
//! The binary is optional. Availability is probed once per process
//! and cached; when it is missing the extraction check reports SKIP
//! rather than failing the run.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::OnceLock;
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::EXTRACT_TIMEOUT;

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Outcome of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// `pdftotext` is not installed.
    Unavailable,
    /// The subprocess did not finish within [`EXTRACT_TIMEOUT`].
    TimedOut,
    /// The tool ran but produced no text (image-based PDF, or a
    /// nonzero exit).
    Empty,
    Text(String),
}

static AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Whether `pdftotext` can be spawned. Probed once, then cached.
pub fn tool_available() -> bool {
    *AVAILABLE.get_or_init(|| {
        let found = Command::new("pdftotext")
            .arg("-v")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok();
        if !found {
            debug!("pdftotext not found on PATH");
        }
        found
    })
}

/// Extract plain text from a PDF, bounded by [`EXTRACT_TIMEOUT`].
pub fn extract_text(path: &Path) -> Extraction {
    if !tool_available() {
        return Extraction::Unavailable;
    }
    let child = Command::new("pdftotext")
        .arg(path)
        .arg("-")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn();
    let child = match child {
        Ok(child) => child,
        Err(e) => {
            warn!(error = %e, "failed to spawn pdftotext");
            return Extraction::Unavailable;
        }
    };

    match wait_with_timeout(child, EXTRACT_TIMEOUT) {
        None => {
            warn!(path = %path.display(), "pdftotext timed out");
            Extraction::TimedOut
        }
        Some((status, bytes)) if status.success() => {
            let text = String::from_utf8_lossy(&bytes).into_owned();
            if text.trim().is_empty() {
                Extraction::Empty
            } else {
                Extraction::Text(text)
            }
        }
        Some(_) => Extraction::Empty,
    }
}

/// Wait for `child` with a deadline, draining stdout on a helper
/// thread so a large output cannot deadlock the pipe. On timeout the
/// child is killed and reaped; a hung tool on one file must not leak
/// a process per checked file in a batch.
fn wait_with_timeout(mut child: Child, timeout: Duration) -> Option<(ExitStatus, Vec<u8>)> {
    let stdout = child.stdout.take();
    let reader = thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut out) = stdout {
            let _ = out.read_to_end(&mut buf);
        }
        buf
    });

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                let bytes = reader.join().unwrap_or_default();
                return Some((status, bytes));
            }
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                warn!(error = %e, "failed to poll pdftotext");
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
        }
    }
}
