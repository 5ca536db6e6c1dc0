// crates/danmaku-source/src/worker.rs
//
// SourceWorker: loads comment files off the UI thread.
// All public API that danmaku-ui calls lives here.
//
// Each load runs on its own short-lived thread and reports back on the shared
// result channel. Loads are tagged with a fresh Uuid; the UI decides which
// result is current, the worker never cancels anything.

use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{bounded, Receiver, Sender};
use uuid::Uuid;

use danmaku_core::source_types::SourceResult;

use crate::load::load_comments;

pub struct SourceWorker {
    /// Results from every load, in completion order.
    pub rx: Receiver<SourceResult>,
    tx:     Sender<SourceResult>,
}

impl SourceWorker {
    pub fn new() -> Self {
        let (tx, rx) = bounded(16);
        Self { rx, tx }
    }

    /// Start loading `episode` from `path`. Returns the request id the result
    /// will carry.
    pub fn load(&self, path: PathBuf, episode: u32) -> Uuid {
        let request_id = Uuid::new_v4();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = match load_comments(&path, episode) {
                Ok(comments) => SourceResult::Comments { request_id, path, episode, comments },
                Err(e) => {
                    eprintln!("[source] {}: {e:#}", path.display());
                    SourceResult::Error { request_id, path, msg: format!("{e:#}") }
                }
            };
            // Receiver gone means the app is shutting down.
            let _ = tx.send(result);
        });
        request_id
    }
}

impl Default for SourceWorker {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn load_reports_comments_with_request_id() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r##"{{"2":[{{"text":"hi","time":1.25,"color":"#FFF"}}]}}"##).unwrap();

        let worker = SourceWorker::new();
        let id = worker.load(f.path().to_path_buf(), 2);
        let result = worker.rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.request_id(), id);
        match result {
            SourceResult::Comments { episode, comments, .. } => {
                assert_eq!(episode, 2);
                assert_eq!(comments.len(), 1);
                assert_eq!(comments[0].start_time_millis, 1_250);
            }
            SourceResult::Error { msg, .. } => panic!("unexpected error: {msg}"),
        }
    }

    #[test]
    fn load_failure_becomes_error_result() {
        let worker = SourceWorker::new();
        let id = worker.load(PathBuf::from("/no/such/file.json"), 1);
        let result = worker.rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(result.request_id(), id);
        assert!(matches!(result, SourceResult::Error { .. }));
    }
}
