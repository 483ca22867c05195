/// StageKit toolkit - global configuration and logger
///
/// The geometry core itself is stateless; the only process-wide state is the
/// active logger and the toolkit configuration. Both live in thread-safe
/// static storage (`OnceLock<RwLock<..>>`) so they can be swapped at runtime.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::error::Result;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== CONFIGURATION =====

/// Toolkit configuration
///
/// Installed once with [`Toolkit::initialize`]. Every field has a sensible
/// default, so an application that never initializes the toolkit still gets
/// working (if chatty in debug builds) behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolkitConfig {
    /// Entries below this severity are dropped before reaching the logger
    pub min_severity: LogSeverity,
    /// Number of scratch volumes pre-reserved by each `VolumeStack`
    pub volume_stack_capacity: usize,
    /// Emit a TRACE entry for every node classified by the frustum culler
    pub trace_culling: bool,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            min_severity: if cfg!(debug_assertions) { LogSeverity::Debug } else { LogSeverity::Info },
            volume_stack_capacity: 64,
            trace_culling: false,
        }
    }
}

// ===== INTERNAL STATE =====

/// Global configuration (initialized with defaults on first access)
static CONFIG: OnceLock<RwLock<ToolkitConfig>> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn config_lock() -> &'static RwLock<ToolkitConfig> {
    CONFIG.get_or_init(|| RwLock::new(ToolkitConfig::default()))
}

fn logger_lock() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

// ===== PUBLIC API =====

/// Toolkit-wide settings and logging entry point
///
/// # Example
///
/// ```no_run
/// use stage_kit::stagekit::{Toolkit, ToolkitConfig};
///
/// Toolkit::initialize(ToolkitConfig {
///     trace_culling: true,
///     ..ToolkitConfig::default()
/// })?;
///
/// // ... traverse and cull scenes ...
///
/// Toolkit::shutdown();
/// # Ok::<(), stage_kit::stagekit::Error>(())
/// ```
pub struct Toolkit;

impl Toolkit {
    /// Install a configuration
    ///
    /// May be called again to replace the active configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `volume_stack_capacity` is zero.
    pub fn initialize(config: ToolkitConfig) -> Result<()> {
        if config.volume_stack_capacity == 0 {
            return Err(crate::stagekit_err!(
                InvalidArgument,
                "stagekit::Toolkit",
                "volume_stack_capacity must be at least 1"
            ));
        }

        if let Ok(mut lock) = config_lock().write() {
            *lock = config;
        }

        crate::stagekit_debug!("stagekit::Toolkit", "Toolkit configuration installed");
        Ok(())
    }

    /// Restore the default configuration
    pub fn shutdown() {
        if let Ok(mut lock) = config_lock().write() {
            *lock = ToolkitConfig::default();
        }
    }

    /// Snapshot of the active configuration
    pub fn config() -> ToolkitConfig {
        config_lock()
            .read()
            .map(|cfg| cfg.clone())
            .unwrap_or_default()
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_lock().write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Whether an entry of this severity would reach the logger
    pub fn is_enabled(severity: LogSeverity) -> bool {
        config_lock()
            .read()
            .map(|cfg| severity >= cfg.min_severity)
            .unwrap_or(true)
    }

    /// Logging method for entries without file:line
    ///
    /// Used by `stagekit_trace!` .. `stagekit_warn!`.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Logging method with file:line information
    ///
    /// Used by `stagekit_error!` and `stagekit_err!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        if let Ok(lock) = logger_lock().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

#[cfg(test)]
#[path = "toolkit_tests.rs"]
mod tests;
