//! Clipboard access provided by the host.
//!
//! The catalog never talks to the operating system directly; it writes through
//! whatever [`Clipboard`] the host hands it.

use anyhow::{Context, Result};

pub trait Clipboard {
    /// Replaces the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Clipboard implementation using arboard for cross-platform clipboard access.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open system clipboard")?;
        write_text(&mut clipboard, text).context("Failed to write to system clipboard")
    }
}

/// X11 and Wayland selections live only as long as their owner, so block until
/// another client (usually a clipboard manager) takes the contents over.
#[cfg(target_os = "linux")]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text.to_string())
}

#[cfg(not(target_os = "linux"))]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text.to_string())
}

/// Forwards writes to another clipboard and remembers the first failure,
/// for callers that must report what the catalog only logs.
pub struct CheckedClipboard<'a> {
    inner: &'a mut dyn Clipboard,
    failure: Option<anyhow::Error>,
}

impl<'a> CheckedClipboard<'a> {
    pub fn new(inner: &'a mut dyn Clipboard) -> Self {
        Self {
            inner,
            failure: None,
        }
    }

    /// `Err` with the first write failure, if any
    pub fn finish(self) -> Result<()> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Clipboard for CheckedClipboard<'_> {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner.set_text(text).map_err(|e| {
            let reported = anyhow::anyhow!("{e:#}");
            if self.failure.is_none() {
                self.failure = Some(e);
            }
            reported
        })
    }
}

/// In-process clipboard holding the last written text
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}
