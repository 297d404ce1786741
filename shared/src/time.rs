use chrono::{NaiveDate, TimeDelta};

/// 把经过的时间格式化为 "2 hours ago" 这样的相对时间
pub fn humanize_ago(elapsed: TimeDelta) -> String {
    let elapsed = elapsed.max(TimeDelta::zero());

    let (count, unit) = if elapsed.num_days() >= 1 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() >= 1 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() >= 1 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}

/// 图表横轴使用的月份标签，如 `2024-01`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_ago_units() {
        assert_eq!(humanize_ago(TimeDelta::seconds(30)), "just now");
        assert_eq!(humanize_ago(TimeDelta::minutes(1)), "1 minute ago");
        assert_eq!(humanize_ago(TimeDelta::minutes(59)), "59 minutes ago");
        assert_eq!(humanize_ago(TimeDelta::hours(2)), "2 hours ago");
        assert_eq!(humanize_ago(TimeDelta::hours(5)), "5 hours ago");
        assert_eq!(humanize_ago(TimeDelta::days(1)), "1 day ago");
        assert_eq!(humanize_ago(TimeDelta::days(3)), "3 days ago");
    }

    #[test]
    fn test_negative_elapsed_is_just_now() {
        assert_eq!(humanize_ago(TimeDelta::hours(-3)), "just now");
    }

    #[test]
    fn test_month_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(month_label(date), "2024-03");
    }
}
