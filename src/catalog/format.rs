//! Display formatting shared by every screen

use chrono::{DateTime, Utc};

/// First letter of each whitespace-separated word ("Dr. Sarah Chen" -> "DSC")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Group digits in thousands ("87420" -> "87,420")
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable age of a timestamp relative to `now`
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(hours / 24, "day")
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Dr. Sarah Chen"), "DSC");
        assert_eq!(initials("Maya Chen"), "MC");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(800), "800");
        assert_eq!(thousands(1680), "1,680");
        assert_eq!(thousands(87420), "87,420");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_relative_label() {
        let now = Utc::now();
        assert_eq!(relative_label(now, now), "Just now");
        assert_eq!(relative_label(now - Duration::seconds(30), now), "Just now");
        assert_eq!(relative_label(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_label(now - Duration::minutes(5), now), "5 minutes ago");
        assert_eq!(relative_label(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(relative_label(now - Duration::days(3), now), "3 days ago");
    }
}
