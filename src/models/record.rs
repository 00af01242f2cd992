use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One shift: a clock-in with an optional clock-out.
///
/// Serialized layout matches the store file format: camelCase keys,
/// RFC 3339 timestamps, optional fields omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    pub id: String,
    pub employee: String,
    pub clock_in: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Local>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ShiftRecord {
    /// Open a new shift for `employee` starting now.
    /// The caller is responsible for trimming and validating the name.
    pub fn open(employee: &str, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee: employee.to_string(),
            clock_in: Local::now(),
            clock_out: None,
            note,
        }
    }

    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Close the shift. A record transitions open -> closed exactly once;
    /// callers must only invoke this on open records.
    pub fn close(&mut self, at: DateTime<Local>) {
        self.clock_out = Some(at);
    }

    /// Hours between clock-in and clock-out (or `as_of` while open),
    /// floored at zero.
    pub fn elapsed_hours(&self, as_of: DateTime<Local>) -> f64 {
        let end = self.clock_out.unwrap_or(as_of);
        let secs = (end - self.clock_in).num_milliseconds() as f64 / 1000.0;
        (secs / 3600.0).max(0.0)
    }

    /// Case-insensitive substring match on the employee name.
    /// An empty filter matches every record.
    pub fn matches(&self, filter: &str) -> bool {
        self.employee
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }

    pub fn clock_in_str(&self) -> String {
        self.clock_in.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn clock_out_str(&self) -> String {
        match self.clock_out {
            Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
            None => "-".to_string(),
        }
    }
}
