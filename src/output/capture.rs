//! In-memory output sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable writer collecting everything written to it.
///
/// Hand one clone to a `Logger` and keep another to inspect the output.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Everything written so far, styling included.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Written text with ANSI styling removed.
    pub fn plain(&self) -> String {
        console::strip_ansi_codes(&self.contents()).into_owned()
    }

    /// Written lines with styling removed. A trailing newline does not start a new line.
    pub fn plain_lines(&self) -> Vec<String> {
        let plain = self.plain();
        if plain.is_empty() {
            return Vec::new();
        }
        plain
            .strip_suffix('\n')
            .unwrap_or(&plain)
            .split('\n')
            .map(str::to_string)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let capture = Capture::new();
        let mut writer = capture.clone();
        writeln!(writer, "\u{1b}[31mone\u{1b}[0m").unwrap();
        writeln!(writer, "two").unwrap();

        assert_eq!(capture.plain_lines(), vec!["one", "two"]);
        assert!(capture.contents().contains('\u{1b}'));

        capture.clear();
        assert!(capture.is_empty());
    }
}
