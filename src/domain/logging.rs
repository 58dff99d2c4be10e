use derive_more::Display;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use strum::EnumString;

/// Log levels with automatic Display implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumString, Deserialize)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[display(fmt = "TRACE")]
    Trace = 0,
    #[display(fmt = "DEBUG")]
    Debug = 1,
    #[display(fmt = " INFO")]
    Info = 2,
    #[display(fmt = " WARN")]
    Warn = 3,
    #[display(fmt = "ERROR")]
    Error = 4,
}

impl Default for LogLevel {
    fn default() -> Self {
        if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info }
    }
}

/// Layer that produced a log line
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LogComponent {
    #[display(fmt = "DOM:{}", _0)]
    Domain(&'static str),
    #[display(fmt = "APP:{}", _0)]
    Application(&'static str),
    #[display(fmt = "INF:{}", _0)]
    Infrastructure(&'static str),
    #[display(fmt = "PRE:{}", _0)]
    Presentation(&'static str),
}

/// Structured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: u64,
    pub level: LogLevel,
    pub component: LogComponent,
    pub message: String,
    pub metadata: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, component: LogComponent, message: &str) -> Self {
        Self {
            timestamp: get_time_provider().current_timestamp(),
            level,
            component,
            message: message.to_string(),
            metadata: None,
        }
    }

    pub fn new_with_metadata(
        level: LogLevel,
        component: LogComponent,
        message: &str,
        metadata: &str,
    ) -> Self {
        Self { metadata: Some(metadata.to_string()), ..Self::new(level, component, message) }
    }
}

/// Source of wall-clock time for log entries and events
pub trait TimeProvider: Send + Sync {
    fn current_timestamp(&self) -> u64;
    fn format_timestamp(&self, timestamp: u64) -> String;
}

/// Sink for structured log entries
pub trait Logger: Send + Sync {
    fn log(&self, entry: LogEntry);

    fn trace(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Trace, component, message));
    }

    fn debug(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Debug, component, message));
    }

    fn info(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Info, component, message));
    }

    fn warn(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Warn, component, message));
    }

    fn error(&self, component: LogComponent, message: &str) {
        self.log(LogEntry::new(LogLevel::Error, component, message));
    }

    /// Log with structured metadata (e.g. the serialized attribute bag)
    fn log_with_metadata(
        &self,
        level: LogLevel,
        component: LogComponent,
        message: &str,
        metadata: &str,
    ) {
        self.log(LogEntry::new_with_metadata(level, component, message, metadata));
    }
}

static GLOBAL_LOGGER: OnceCell<Box<dyn Logger>> = OnceCell::new();
static GLOBAL_TIME_PROVIDER: OnceCell<Box<dyn TimeProvider>> = OnceCell::new();

/// Install the process-wide logger. Later calls are ignored.
pub fn init_logger(logger: Box<dyn Logger>) -> bool {
    GLOBAL_LOGGER.set(logger).is_ok()
}

/// Install the process-wide time provider. Later calls are ignored.
pub fn init_time_provider(time_provider: Box<dyn TimeProvider>) -> bool {
    GLOBAL_TIME_PROVIDER.set(time_provider).is_ok()
}

pub fn get_logger() -> &'static dyn Logger {
    GLOBAL_LOGGER.get().map(|logger| logger.as_ref()).unwrap_or(&NoOpLogger)
}

pub fn get_time_provider() -> &'static dyn TimeProvider {
    GLOBAL_TIME_PROVIDER.get().map(|provider| provider.as_ref()).unwrap_or(&CounterTimeProvider)
}

struct NoOpLogger;

impl Logger for NoOpLogger {
    fn log(&self, _entry: LogEntry) {}
}

/// Monotonic counter used until a real clock is installed
struct CounterTimeProvider;

impl TimeProvider for CounterTimeProvider {
    fn current_timestamp(&self) -> u64 {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format!("{:06}", timestamp)
    }
}

#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().trace($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            $crate::domain::logging::get_logger().debug($component, &format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().info($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().warn($component, &format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::domain::logging::get_logger().error($component, &format!($($arg)*));
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn levels_parse_case_insensitive() {
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn component_display_carries_layer_prefix() {
        assert_eq!(LogComponent::Application("Widget").to_string(), "APP:Widget");
        assert_eq!(LogComponent::Infrastructure("Highcharts").to_string(), "INF:Highcharts");
    }

    #[test]
    fn metadata_entry_keeps_message() {
        let entry = LogEntry::new_with_metadata(
            LogLevel::Debug,
            LogComponent::Presentation("Hook"),
            "mounted",
            "{\"productName\":\"BTCUSD\"}",
        );
        assert_eq!(entry.message, "mounted");
        assert_eq!(entry.metadata.as_deref(), Some("{\"productName\":\"BTCUSD\"}"));
    }
}
