/// Format a remaining duration in milliseconds as `"{hours}h {minutes}m"`,
/// flooring both parts. Callers handle the zero-and-below case before
/// formatting.
pub fn format_remaining(remaining_ms: i64) -> String {
    let hours = remaining_ms / 3_600_000;
    let minutes = (remaining_ms % 3_600_000) / 60_000;
    format!("{}h {}m", hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(86_399_999), "23h 59m");
        assert_eq!(format_remaining(3_600_000), "1h 0m");
        assert_eq!(format_remaining(60_000), "0h 1m");
        assert_eq!(format_remaining(59_999), "0h 0m");
        assert_eq!(format_remaining(7_521_000), "2h 5m");
    }
}
