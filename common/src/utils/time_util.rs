use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// 是否为工作日（周一到周五）
pub fn is_weekday(ts: DateTime<Utc>) -> bool {
    !matches!(ts.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 剩余时间文案
///
/// 到期前: "3h 12m 5s remaining" / 不足一小时: "12m 5s remaining"
/// 到期后: 返回 ready_text
pub fn format_remaining(end: DateTime<Utc>, now: DateTime<Utc>, ready_text: &str) -> String {
    let diff = end - now;
    if diff <= Duration::zero() {
        return ready_text.to_string();
    }

    let total_secs = diff.num_seconds();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s remaining", hours, minutes, seconds)
    } else {
        format!("{}m {}s remaining", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_weekday() {
        // 2026-08-03 是周一, 2026-08-08 是周六
        let monday = Utc.with_ymd_and_hms(2026, 8, 3, 9, 0, 0).unwrap();
        let saturday = Utc.with_ymd_and_hms(2026, 8, 8, 9, 0, 0).unwrap();
        let sunday = Utc.with_ymd_and_hms(2026, 8, 9, 9, 0, 0).unwrap();
        assert!(is_weekday(monday));
        assert!(!is_weekday(saturday));
        assert!(!is_weekday(sunday));
    }

    #[test]
    fn test_format_remaining_hours() {
        let now = Utc.with_ymd_and_hms(2026, 8, 3, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 3, 12, 30, 5).unwrap();
        assert_eq!(format_remaining(end, now, "ready"), "3h 30m 5s remaining");
    }

    #[test]
    fn test_format_remaining_minutes_only() {
        let now = Utc.with_ymd_and_hms(2026, 8, 3, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 3, 9, 4, 30).unwrap();
        assert_eq!(format_remaining(end, now, "ready"), "4m 30s remaining");
    }

    #[test]
    fn test_format_remaining_elapsed() {
        let now = Utc.with_ymd_and_hms(2026, 8, 3, 18, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 8, 3, 17, 0, 0).unwrap();
        assert_eq!(
            format_remaining(end, now, "Ready to complete!"),
            "Ready to complete!"
        );
    }
}
