//! Human-readable formatting shared by the tables and the dashboard

use chrono::{DateTime, Utc};

use crate::models::PortBinding;

/// Size in the decimal units the engine CLI uses: `72.8 MB`, `1.2 GB`
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1000.0 && unit < UNITS.len() - 1 {
        size /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Relative age from a unix timestamp: `5 minutes ago`, `3 days ago`
pub fn format_age(created_unix: i64) -> String {
    let created = DateTime::<Utc>::from_timestamp(created_unix, 0).unwrap_or_else(Utc::now);
    format_age_from(created, Utc::now())
}

fn format_age_from(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - created).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }

    let (count, unit) = if seconds < 60 {
        (seconds, "second")
    } else if seconds < 3600 {
        (seconds / 60, "minute")
    } else if seconds < 86_400 {
        (seconds / 3600, "hour")
    } else if seconds < 86_400 * 30 {
        (seconds / 86_400, "day")
    } else if seconds < 86_400 * 365 {
        (seconds / (86_400 * 30), "month")
    } else {
        (seconds / (86_400 * 365), "year")
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Port list the way `docker ps` prints it:
/// `0.0.0.0:8080->80/tcp, 443/tcp`
pub fn format_ports(ports: &[PortBinding]) -> String {
    let mut parts: Vec<String> = ports
        .iter()
        .map(|p| match p.public_port {
            Some(public) => format!(
                "{}:{}->{}/{}",
                p.ip.as_deref().unwrap_or("0.0.0.0"),
                public,
                p.private_port,
                p.protocol
            ),
            None => format!("{}/{}", p.private_port, p.protocol),
        })
        .collect();
    parts.dedup();
    parts.join(", ")
}

/// Truncate to `max` characters with an ellipsis, leaving short input alone
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}\u{2026}", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1_500), "1.5 kB");
        assert_eq!(format_bytes(72_800_000), "72.8 MB");
        assert_eq!(format_bytes(1_200_000_000), "1.2 GB");
    }

    #[test]
    fn test_format_age_units() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let cases = [
            (now - chrono::Duration::seconds(30), "30 seconds ago"),
            (now - chrono::Duration::minutes(1), "1 minute ago"),
            (now - chrono::Duration::hours(5), "5 hours ago"),
            (now - chrono::Duration::days(3), "3 days ago"),
            (now - chrono::Duration::days(60), "2 months ago"),
            (now - chrono::Duration::days(800), "2 years ago"),
        ];
        for (created, expected) in cases {
            assert_eq!(format_age_from(created, now), expected);
        }
    }

    #[test]
    fn test_format_ports() {
        let ports = vec![
            PortBinding {
                ip: Some("0.0.0.0".to_string()),
                private_port: 80,
                public_port: Some(8080),
                protocol: "tcp".to_string(),
            },
            PortBinding {
                ip: None,
                private_port: 443,
                public_port: None,
                protocol: "tcp".to_string(),
            },
        ];
        assert_eq!(format_ports(&ports), "0.0.0.0:8080->80/tcp, 443/tcp");
        assert_eq!(format_ports(&[]), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer command line", 10), "a much lo\u{2026}");
    }
}
