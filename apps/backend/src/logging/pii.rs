//! PII-safe formatting for log fields.

use std::fmt;

/// Display wrapper that masks a sensitive value in log output.
///
/// Keeps the first two characters so related log lines can still be
/// correlated, and replaces the rest with `***`. Values that look like
/// bearer tokens (three dot-separated segments) are hidden entirely.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.split('.').count() == 3 && value.len() > 32 {
            return f.write_str("[REDACTED_TOKEN]");
        }
        let visible: String = value.chars().take(2).collect();
        if visible.chars().count() == value.chars().count() {
            f.write_str(&"*".repeat(visible.chars().count()))
        } else {
            write!(f, "{visible}***")
        }
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}
