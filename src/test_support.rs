/// Log capture for unit tests.
///
/// Installs a process-wide `log::Log` that records every entry along with
/// the thread that emitted it. Tests run on separate threads, so filtering
/// by the current thread keeps assertions isolated.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, OnceLock};
use std::thread::{self, ThreadId};

#[derive(Debug, Clone)]
pub(crate) struct CapturedEntry {
    pub thread: ThreadId,
    pub target: String,
    pub level: Level,
    pub message: String,
}

#[derive(Default)]
pub(crate) struct CaptureLogger {
    entries: Mutex<Vec<CapturedEntry>>,
}

impl CaptureLogger {
    /// Entries logged on `target` by the calling thread.
    pub fn current_thread(&self, target: &str) -> Vec<CapturedEntry> {
        let me = thread::current().id();
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.thread == me && e.target == target)
            .cloned()
            .collect()
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.entries.lock().unwrap().push(CapturedEntry {
            thread: thread::current().id(),
            target: record.target().to_string(),
            level: record.level(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

/// Installs the capturing logger (once) and returns it.
pub(crate) fn capture_logs() -> &'static CaptureLogger {
    static LOGGER: OnceLock<&'static CaptureLogger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        let logger: &'static CaptureLogger = Box::leak(Box::new(CaptureLogger::default()));
        let _ = log::set_logger(logger);
        log::set_max_level(LevelFilter::Trace);
        logger
    })
}

// ---------------------------------------------------------------------------
// Fixture HTTP server
// ---------------------------------------------------------------------------

/// Local HTTP server answering every request with one canned response.
///
/// Stops and joins its worker thread on drop.
pub(crate) struct FixtureServer {
    pub base_url: String,
    server: std::sync::Arc<tiny_http::Server>,
    worker: Option<thread::JoinHandle<()>>,
}

impl FixtureServer {
    pub fn start(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let server = std::sync::Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();

        let listener = std::sync::Arc::clone(&server);
        let worker = thread::spawn(move || {
            for request in listener.incoming_requests() {
                let response = tiny_http::Response::from_string(body.clone()).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            server,
            worker: Some(worker),
        }
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
