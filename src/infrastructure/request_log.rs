//! Append-only request log file
//!
//! One line per completed request (`METHOD PATH -> STATUS`) and one line per
//! unexpected failure (`Exception: <message>`). Writes are best-effort: a
//! failed append is reported through `tracing` and otherwise ignored.

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

/// Request log file sink
#[derive(Debug)]
pub struct RequestLog {
    path: PathBuf,
    /// Serializes appends so lines from concurrent requests never interleave
    write_lock: Mutex<()>,
}

impl RequestLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format the line recorded for a completed request
    pub fn request_line(method: &str, path: &str, status: u16) -> String {
        format!("{} {} -> {}", method, path, status)
    }

    /// Format the line recorded for an unexpected failure
    pub fn exception_line(message: &str) -> String {
        format!("Exception: {}", message)
    }

    /// Record a completed request
    pub async fn record_request(&self, method: &str, path: &str, status: u16) {
        self.append(&Self::request_line(method, path, status)).await;
    }

    /// Record an unexpected failure
    pub async fn record_exception(&self, message: &str) {
        self.append(&Self::exception_line(message)).await;
    }

    /// Append one line, swallowing errors
    pub async fn append(&self, line: &str) {
        if let Err(e) = self.try_append(line).await {
            warn!(path = %self.path.display(), error = %e, "Failed to write request log");
        }
    }

    async fn try_append(&self, line: &str) -> io::Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(format!("{}\n", line).as_bytes()).await?;
        file.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_formats() {
        assert_eq!(RequestLog::request_line("GET", "/users/0", 200), "GET /users/0 -> 200");
        assert_eq!(RequestLog::exception_line("boom"), "Exception: boom");
    }

    #[tokio::test]
    async fn test_appends_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = RequestLog::new(dir.path().join("server.log"));

        log.record_request("GET", "/", 200).await;
        log.record_request("POST", "/users/add", 201).await;
        log.record_exception("boom").await;

        let contents = tokio::fs::read_to_string(log.path()).await.unwrap();
        assert_eq!(
            contents,
            "GET / -> 200\nPOST /users/add -> 201\nException: boom\n"
        );
    }

    #[tokio::test]
    async fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.log");
        tokio::fs::write(&path, "earlier\n").await.unwrap();

        RequestLog::new(&path).record_request("GET", "/", 200).await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "earlier\nGET / -> 200\n");
    }

    #[tokio::test]
    async fn test_write_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist
        let log = RequestLog::new(dir.path().join("missing").join("server.log"));

        log.record_request("GET", "/", 200).await;

        assert!(!log.path().exists());
    }

    #[tokio::test]
    async fn test_concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let log = std::sync::Arc::new(RequestLog::new(dir.path().join("server.log")));

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let log = std::sync::Arc::clone(&log);
                tokio::spawn(async move {
                    log.record_request("GET", &format!("/users/{}", i), 200).await;
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let contents = tokio::fs::read_to_string(log.path()).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 20);
        assert!(lines
            .iter()
            .all(|l| l.starts_with("GET /users/") && l.ends_with(" -> 200")));
    }
}
