use log::{info, warn};

/// Tags engine log lines with the calculator that produced them.
pub struct LogManager {
    source: &'static str,
}

impl LogManager {
    pub fn new(source: &'static str) -> Self {
        Self { source }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.source, message);
    }

    pub fn caution(&self, message: &str) {
        warn!("[{}] {}", self.source, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("sizing")
    }
}
