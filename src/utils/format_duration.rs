use std::time::Duration;

/// Formats a duration as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    format!(
        "{:02}:{:02}:{:02}",
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}
