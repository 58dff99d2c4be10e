use wasm_bindgen::JsValue;

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Logger writing to the browser console, one console method per level
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn format_log_entry(entry: &LogEntry) -> String {
        let timestamp = get_time_provider().format_timestamp(entry.timestamp);
        match &entry.metadata {
            Some(metadata) => format!(
                "[{}] {} {} | {} | {}",
                timestamp, entry.level, entry.component, entry.message, metadata
            ),
            None => format!(
                "[{}] {} {} | {}",
                timestamp, entry.level, entry.component, entry.message
            ),
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if !self.enabled(entry.level) {
            return;
        }
        let formatted = JsValue::from(Self::format_log_entry(&entry));
        match entry.level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Wall clock backed by `Date.now()`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&(timestamp as f64).into());
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::logging::LogComponent;

    #[test]
    fn level_filter() {
        let logger = ConsoleLogger::new(LogLevel::Info);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Info));
        assert!(logger.enabled(LogLevel::Error));
    }

    #[test]
    fn formatted_line_lists_level_component_message() {
        let entry = LogEntry::new(LogLevel::Warn, LogComponent::Application("ChartWidget"), "trade dropped");
        let line = ConsoleLogger::format_log_entry(&entry);
        assert!(line.ends_with(" WARN APP:ChartWidget | trade dropped"), "{line}");
    }
}
