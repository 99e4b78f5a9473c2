use crate::error::ScheduleError;
use chrono::NaiveTime;

/// Parse a wall-clock time in 24-hour `HH:MM` form.
///
/// Out-of-range hours or minutes and anything that is not two numeric
/// fields are rejected here, so downstream arithmetic never sees a bad
/// time.
pub fn parse_wall_clock(input: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| ScheduleError::InvalidTime(input.to_string()))
}

/// Format a wall-clock time as zero-padded `HH:MM`.
pub fn format_wall_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
