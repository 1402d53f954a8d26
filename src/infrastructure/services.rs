use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, format_clock_millis};
use crate::domain::market_data::{RandomSource, ThreadRandom};

/// Console logger for the WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if !self.accepts(entry.level) {
            return;
        }
        let formatted: wasm_bindgen::JsValue = entry.format_line().into();
        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&formatted),
            LogLevel::Info => web_sys::console::info_1(&formatted),
            LogLevel::Warn => web_sys::console::warn_1(&formatted),
            LogLevel::Error => web_sys::console::error_1(&formatted),
        }
    }
}

/// Wall clock from `Date.now()`
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format_clock_millis(timestamp)
    }
}

/// Randomness from `Math.random()`
pub struct BrowserRandom;

impl RandomSource for BrowserRandom {
    fn next_unit(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Production source for the current target.
pub fn default_random_source() -> Box<dyn RandomSource> {
    if cfg!(target_arch = "wasm32") {
        Box::new(BrowserRandom)
    } else {
        Box::new(ThreadRandom::new())
    }
}
