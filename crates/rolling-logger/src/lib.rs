//! Rolling File Logger
//!
//! Writes `tracing` output (and `log` records bridged into it) to
//! size-capped log files, keeping the most recent lines in a circular
//! buffer so they can be shown without reading the files back.

use std::collections::VecDeque;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::MakeWriter;

/// Size at which the active file is rotated
pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
/// Files kept on disk, the active one included
pub const DEFAULT_MAX_FILES: usize = 5;
/// Lines kept in memory
pub const DEFAULT_BUFFER_LINES: usize = 200;

static LOGGER: OnceLock<RollingWriter> = OnceLock::new();

/// Logger errors
#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    AlreadyInitialized,
    NotInitialized,
    Subscriber(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::Io(e) => write!(f, "Log file error: {}", e),
            LoggerError::AlreadyInitialized => write!(f, "Logger already initialized"),
            LoggerError::NotInitialized => write!(f, "Logger not initialized"),
            LoggerError::Subscriber(msg) => write!(f, "Failed to install subscriber: {}", msg),
        }
    }
}

impl std::error::Error for LoggerError {}

impl From<io::Error> for LoggerError {
    fn from(e: io::Error) -> Self {
        LoggerError::Io(e)
    }
}

/// Circular buffer of complete log lines
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
    partial: String,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
            partial: String::new(),
        }
    }

    /// Append raw writer output; only newline-terminated lines are kept
    pub fn push_bytes(&mut self, buf: &[u8]) {
        self.partial.push_str(&String::from_utf8_lossy(buf));
        while let Some(pos) = self.partial.find('\n') {
            let line: String = self.partial.drain(..=pos).collect();
            self.push_line(line.trim_end_matches(['\n', '\r']).to_string());
        }
    }

    fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Size-capped file with numbered archives (`name.1.log` is the newest)
struct RollingFile {
    dir: PathBuf,
    base_name: String,
    max_bytes: u64,
    max_files: usize,
    file: File,
    written: u64,
}

impl RollingFile {
    fn open(dir: &Path, base_name: String, max_bytes: u64, max_files: usize) -> io::Result<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.log", base_name));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            dir: dir.to_path_buf(),
            base_name,
            max_bytes,
            max_files: max_files.max(1),
            file,
            written,
        })
    }

    fn active_path(&self) -> PathBuf {
        self.dir.join(format!("{}.log", self.base_name))
    }

    fn archive_path(&self, n: usize) -> PathBuf {
        self.dir.join(format!("{}.{}.log", self.base_name, n))
    }

    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.max_files == 1 {
            self.file = File::create(self.active_path())?;
        } else {
            let oldest = self.archive_path(self.max_files - 1);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..self.max_files - 1).rev() {
                let from = self.archive_path(n);
                if from.exists() {
                    fs::rename(&from, self.archive_path(n + 1))?;
                }
            }
            fs::rename(self.active_path(), self.archive_path(1))?;
            self.file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.active_path())?;
        }

        self.written = 0;
        Ok(())
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.written > 0 && self.written + buf.len() as u64 > self.max_bytes {
            self.rotate()?;
        }
        self.file.write_all(buf)?;
        self.written += buf.len() as u64;
        Ok(())
    }
}

struct Inner {
    file: RollingFile,
    buffer: RingBuffer,
}

/// Shared writer handed to the tracing fmt layer
#[derive(Clone)]
pub struct RollingWriter {
    inner: Arc<Mutex<Inner>>,
}

impl RollingWriter {
    pub fn new(
        dir: impl AsRef<Path>,
        app_name: &str,
        max_bytes: u64,
        max_files: usize,
        buffer_lines: usize,
    ) -> Result<Self, LoggerError> {
        let base_name = format!("{}-{}", app_name, chrono::Local::now().format("%Y-%m-%d"));
        let file = RollingFile::open(dir.as_ref(), base_name, max_bytes, max_files)?;

        Ok(Self {
            inner: Arc::new(Mutex::new(Inner {
                file,
                buffer: RingBuffer::new(buffer_lines),
            })),
        })
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "logger lock poisoned"))
    }

    /// Recent lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.lock().map(|inner| inner.buffer.lines()).unwrap_or_default()
    }

    /// Path of the file currently written to
    pub fn log_path(&self) -> Option<PathBuf> {
        self.lock().ok().map(|inner| inner.file.active_path())
    }
}

impl Write for RollingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock()?;
        inner.buffer.push_bytes(buf);
        inner.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.file.file.flush()
    }
}

impl<'a> MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install the global subscriber writing under `log_dir`
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), LoggerError> {
    let writer = RollingWriter::new(
        &log_dir,
        app_name,
        DEFAULT_MAX_BYTES,
        DEFAULT_MAX_FILES,
        DEFAULT_BUFFER_LINES,
    )?;

    if LOGGER.set(writer.clone()).is_err() {
        return Err(LoggerError::AlreadyInitialized);
    }

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;
    set_verbose(true);

    tracing::info!(app = app_name, dir = %log_dir.display(), "logger initialized");
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    LOGGER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

/// Raise or lower the `log` facade ceiling (debug vs info)
pub fn set_verbose(enabled: bool) {
    log::set_max_level(if enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
}

/// Recent lines of the global logger (empty before init)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(|w| w.recent_lines()).unwrap_or_default()
}

/// Active file of the global logger
pub fn log_path() -> Option<PathBuf> {
    LOGGER.get().and_then(|w| w.log_path())
}
