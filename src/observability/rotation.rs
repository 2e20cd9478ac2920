//! Size-capped append-only log file with numbered backups.
//!
//! When the live file would grow past its limit it is shifted to `<name>.1`,
//! the previous `<name>.1` to `<name>.2`, and so on; the oldest backup beyond
//! the retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_BACKUPS: usize = 3;

/// Line-oriented writer that rotates by size.
///
/// Safe to share between threads; writes are serialized through a mutex.
///
/// ```no_run
/// use countrydex::observability::RotatingFile;
///
/// let log = RotatingFile::with_limits("/tmp/countrydex.json", 1024, 2);
/// log.append_line("{}")?;
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    inner: Mutex<Option<Open>>,
}

#[derive(Debug)]
struct Open {
    file: File,
    written: u64,
}

impl RotatingFile {
    /// Creates a writer with a 5 MB limit and three backups.
    ///
    /// Nothing touches the disk until the first append.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_BACKUPS)
    }

    #[must_use]
    pub fn with_limits(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
            backups,
            inner: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// A single line larger than the limit is still written, into a fresh file.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening, or writing the file.
    pub fn append_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "trace log lock poisoned"))?;

        let incoming = line.len() as u64 + 1;
        if guard.is_none() {
            *guard = Some(self.open()?);
        }
        if guard
            .as_ref()
            .is_some_and(|open| open.written > 0 && open.written + incoming > self.max_bytes)
        {
            *guard = None;
            self.rotate()?;
            *guard = Some(self.open()?);
        }

        let open = guard
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "trace log not open"))?;
        writeln!(open.file, "{line}")?;
        open.file.flush()?;
        open.written += incoming;
        Ok(())
    }

    fn open(&self) -> io::Result<Open> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let written = file.metadata()?.len();
        Ok(Open { file, written })
    }

    fn backup_path(&self, index: usize) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return fs::remove_file(&self.path).or_else(ignore_missing);
        }

        fs::remove_file(self.backup_path(self.backups)).or_else(ignore_missing)?;
        for index in (1..self.backups).rev() {
            let from = self.backup_path(index);
            if from.exists() {
                fs::rename(&from, self.backup_path(index + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1)).or_else(ignore_missing)
    }
}

fn ignore_missing(err: io::Error) -> io::Result<()> {
    if err.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn appends_lines_until_full() {
        let dir = tempfile::tempdir().unwrap();
        let log = RotatingFile::with_limits(dir.path().join("trace.json"), 64, 2);

        log.append_line("first").unwrap();
        log.append_line("second").unwrap();

        assert_eq!(read(log.path()), "first\nsecond\n");
        assert!(!dir.path().join("trace.json.1").exists());
    }

    #[test]
    fn rotates_into_numbered_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let log = RotatingFile::with_limits(&path, 10, 2);

        for line in ["aaaaaaaa", "bbbbbbbb", "cccccccc", "dddddddd"] {
            log.append_line(line).unwrap();
        }

        assert_eq!(read(&path), "dddddddd\n");
        assert_eq!(read(&dir.path().join("trace.json.1")), "cccccccc\n");
        assert_eq!(read(&dir.path().join("trace.json.2")), "bbbbbbbb\n");
        assert!(!dir.path().join("trace.json.3").exists());
    }

    #[test]
    fn existing_file_size_counts_toward_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        fs::write(&path, "0123456789\n").unwrap();

        let log = RotatingFile::with_limits(&path, 16, 1);
        log.append_line("next").unwrap();
        log.append_line("fresh").unwrap();

        assert_eq!(read(&dir.path().join("trace.json.1")), "0123456789\nnext\n");
        assert_eq!(read(&path), "fresh\n");
    }

    #[test]
    fn oversized_line_is_written_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let log = RotatingFile::with_limits(&path, 4, 0);

        log.append_line("this line is too long").unwrap();
        log.append_line("again").unwrap();

        assert_eq!(read(&path), "again\n");
    }
}
