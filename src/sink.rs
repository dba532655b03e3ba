//! Result sink: the log file when one is configured and can be opened,
//! otherwise stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::checker::CheckResult;

/// Where result lines go.
#[derive(Debug)]
pub enum Sink {
    File(File),
    Stderr,
}

impl Sink {
    /// Opens the log file in append mode, creating it if absent. A missing or
    /// empty path selects stderr; an open failure is logged as a warning and
    /// also falls back to stderr.
    pub fn open(log_file: Option<&Path>) -> Self {
        let path = match log_file {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Sink::Stderr,
        };
        match open_append(path) {
            Ok(file) => {
                tracing::debug!("writing results to {}", path.display());
                Sink::File(file)
            }
            Err(err) => {
                tracing::warn!(
                    "cannot open log file {}: {}; writing to stderr",
                    path.display(),
                    err
                );
                Sink::Stderr
            }
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Sink::File(_))
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::File(f) => f.write(buf),
            Sink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::File(f) => f.flush(),
            Sink::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// rw-rw-rw- before umask, like any shell redirect.
fn open_append(path: &Path) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o666);
    }
    opts.open(path)
}

/// Writes one result line and flushes it.
pub fn report<W: Write + ?Sized>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    writeln!(out, "{}", result)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;

    fn sample() -> CheckResult {
        CheckResult {
            host: "example.com".to_string(),
            status_text: "200 OK".to_string(),
            duration: Duration::from_millis(42),
        }
    }

    #[test]
    fn no_path_selects_stderr() {
        assert!(!Sink::open(None).is_file());
        assert!(!Sink::open(Some(Path::new(""))).is_file());
    }

    #[test]
    fn log_file_is_created_and_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");

        let mut sink = Sink::open(Some(path.as_path()));
        assert!(sink.is_file());
        report(&mut sink, &sample()).unwrap();

        let mut sink = Sink::open(Some(path.as_path()));
        report(&mut sink, &sample()).unwrap();

        let data = fs::read_to_string(&path).unwrap();
        assert_eq!(
            data,
            "example.com 200 OK (42ms)\nexample.com 200 OK (42ms)\n"
        );
    }

    #[test]
    fn unopenable_log_file_falls_back_to_stderr() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        assert!(!Sink::open(Some(dir.path())).is_file());

        let missing_parent: PathBuf = dir.path().join("no-such-dir").join("out.log");
        assert!(!Sink::open(Some(missing_parent.as_path())).is_file());
    }

    #[test]
    fn report_writes_to_any_writer() {
        let mut buf: Vec<u8> = Vec::new();
        report(&mut buf, &sample()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "example.com 200 OK (42ms)\n");
    }
}
