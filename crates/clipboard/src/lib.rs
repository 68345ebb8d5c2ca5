//! Clipboard operations for pow.
//!
//! Reads go through arboard on a helper thread so a stuck clipboard owner
//! can never freeze the editor: the caller waits at most the configured
//! timeout and treats anything else as an empty clipboard.
//! On Linux, CLIPBOARD is tried before PRIMARY.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind};

/// Source of pasted text.
pub trait PasteSource {
    /// Current clipboard text; `None` when empty, unavailable or too slow.
    fn paste(&self) -> Option<String>;
}

/// System clipboard bounded by a read timeout
#[derive(Debug, Clone, Copy)]
pub struct SystemClipboard {
    timeout: Duration,
}

impl SystemClipboard {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl PasteSource for SystemClipboard {
    fn paste(&self) -> Option<String> {
        read_bounded(read_system_clipboard, self.timeout)
    }
}

/// Run `read` on a helper thread and wait at most `timeout` for its result.
///
/// A helper that misses the deadline is abandoned; its late result is
/// dropped with the channel.
fn read_bounded<F>(read: F, timeout: Duration) -> Option<String>
where
    F: FnOnce() -> Option<String> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let spawned = thread::Builder::new()
        .name("pow-clipboard".to_string())
        .spawn(move || {
            let _ = tx.send(read());
        });
    if let Err(e) = spawned {
        pow_logger::warn(format!("Failed to spawn clipboard reader: {}", e));
        return None;
    }

    match rx.recv_timeout(timeout) {
        Ok(text) => text.filter(|t| !t.is_empty()),
        Err(mpsc::RecvTimeoutError::Timeout) => {
            pow_logger::warn(format!("Clipboard read timed out after {:?}", timeout));
            None
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => None,
    }
}

fn read_system_clipboard() -> Option<String> {
    let mut clipboard = match arboard::Clipboard::new() {
        Ok(clipboard) => clipboard,
        Err(e) => {
            pow_logger::debug(format!("Clipboard unavailable: {}", e));
            return None;
        }
    };

    #[cfg(target_os = "linux")]
    {
        // Try CLIPBOARD selection first
        if let Ok(text) = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text()
        {
            if !text.is_empty() {
                return Some(text);
            }
        }

        // Fall back to PRIMARY selection
        clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
            .ok()
    }

    #[cfg(not(target_os = "linux"))]
    clipboard.get_text().ok()
}
