//! Diagnostic Logging
//!
//! `Diagnostics` mirrors the persisted `debug` flag: detail records are
//! emitted only while it is set. Lifecycle events use `log::info!`
//! directly and are not gated. The `log` ceiling is raised once by
//! [`init`]; individual switches never touch it.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared, cheaply cloned debug switch
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    enabled: Arc<AtomicBool>,
}

impl Diagnostics {
    pub fn new(enabled: bool) -> Self {
        let diagnostics = Self::default();
        diagnostics.set_enabled(enabled);
        diagnostics
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Emit `context` with `detail` when debugging is on
    pub fn show(&self, context: &str, detail: impl Debug) {
        if self.is_enabled() {
            log::debug!(target: "checklist", "{} {:?}", context, detail);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
static INSTALLED: std::sync::OnceLock<Result<(), String>> = std::sync::OnceLock::new();

/// Install the rolling file logger described by `config`
///
/// Only the first call in a process installs anything; later calls return
/// that first outcome and keep writing to the first log directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &crate::config::AppConfig) -> crate::domain::DomainResult<()> {
    INSTALLED
        .get_or_init(|| {
            match rolling_logger::init_logger(config.log_dir.clone(), &config.app_name) {
                Ok(()) | Err(rolling_logger::LoggerError::AlreadyInitialized) => Ok(()),
                Err(e) => Err(e.to_string()),
            }
        })
        .clone()
        .map_err(crate::domain::DomainError::Internal)
}
