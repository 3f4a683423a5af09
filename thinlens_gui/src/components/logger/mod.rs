pub mod logger_component;
use chrono::{self, Timelike};

/// Maximum number of kept log entries
pub const MAX_LOG_ENTRIES: usize = 100;

#[derive(Clone, Default)]
pub struct Logs {
    logs: Vec<String>,
}

impl Logs {
    #[must_use]
    pub const fn new() -> Self {
        Self { logs: Vec::new() }
    }

    #[must_use]
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    pub fn add_log(&mut self, log_msg: &str) {
        let dt = chrono::offset::Local::now();
        self.logs
            .push(format_entry(dt.hour(), dt.minute(), dt.second(), log_msg));
        if self.logs.len() > MAX_LOG_ENTRIES {
            self.logs.remove(0);
        }
    }
}
fn format_entry(hour: u32, minute: u32, second: u32, log_msg: &str) -> String {
    format!("{hour:0>2}:{minute:0>2}:{second:0>2} [log]:\t{log_msg}")
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn entry_format() {
        assert_eq!(format_entry(9, 5, 0, "test"), "09:05:00 [log]:\ttest");
    }
    #[test]
    fn add_log() {
        let mut logs = Logs::new();
        logs.add_log("first");
        assert_eq!(logs.logs().len(), 1);
        assert!(logs.logs()[0].ends_with("[log]:\tfirst"));
        for i in 0..MAX_LOG_ENTRIES {
            logs.add_log(&format!("{i}"));
        }
        assert_eq!(logs.logs().len(), MAX_LOG_ENTRIES);
        assert!(logs.logs()[0].ends_with("\t0"));
    }
}
