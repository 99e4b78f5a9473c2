/// Format a sleep duration in minutes as hours plus leftover minutes,
/// e.g. "7h 30min". The minute part is dropped when it is zero.
pub fn format_sleep_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}min", hours, mins)
    } else {
        format!("{}h", hours)
    }
}
