//! Shared utility functions for RoadPulse crates.

/// Timestamp utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use std::fmt::Display;

    /// Naive layouts the server has been seen to emit, tried in order.
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    /// Parse an ISO-8601 timestamp.
    ///
    /// RFC 3339 strings keep their offset. Naive strings (the Python
    /// backend's `datetime.utcnow().isoformat()`) are taken as UTC.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.with_timezone(&Utc));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(naive.and_utc());
            }
        }
        anyhow::bail!("unrecognized timestamp: {s:?}")
    }

    /// Format a timestamp as a calendar date in `zone`, using the offset
    /// in force at that instant.
    ///
    /// `pattern` is a chrono strftime pattern, e.g. `"%-m/%-d/%Y"`.
    pub fn format_display_date<Tz>(ts: &DateTime<Utc>, zone: &Tz, pattern: &str) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        ts.with_timezone(zone).format(pattern).to_string()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{
            Datelike, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Timelike,
        };

        /// Central European zone with a crude summer time: +2 from April
        /// through October, +1 otherwise.
        #[derive(Debug, Clone, Copy)]
        struct SummerTimeZone;

        impl SummerTimeZone {
            fn offset_at(month: u32) -> FixedOffset {
                let hours = if (4..=10).contains(&month) { 2 } else { 1 };
                FixedOffset::east_opt(hours * 3600).unwrap()
            }
        }

        impl TimeZone for SummerTimeZone {
            type Offset = FixedOffset;

            fn from_offset(_offset: &FixedOffset) -> Self {
                SummerTimeZone
            }

            fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
                LocalResult::Single(Self::offset_at(local.month()))
            }

            fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
                LocalResult::Single(Self::offset_at(local.month()))
            }

            fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
                Self::offset_at(utc.month())
            }

            fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
                Self::offset_at(utc.month())
            }
        }

        #[test]
        fn test_parse_rfc3339() {
            let ts = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
            assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 1));
        }

        #[test]
        fn test_parse_rfc3339_with_offset() {
            let ts = parse_timestamp("2024-03-10T02:30:00+02:00").unwrap();
            assert_eq!(ts.hour(), 0);
            assert_eq!(ts.minute(), 30);
        }

        #[test]
        fn test_parse_naive_as_utc() {
            let ts = parse_timestamp("2025-11-04T17:22:09.123456").unwrap();
            assert_eq!((ts.year(), ts.month(), ts.day(), ts.hour()), (2025, 11, 4, 17));

            let spaced = parse_timestamp("2025-11-04 17:22:09").unwrap();
            assert_eq!(spaced.minute(), 22);
        }

        #[test]
        fn test_parse_rejects_garbage() {
            assert!(parse_timestamp("yesterday").is_err());
            assert!(parse_timestamp("").is_err());
        }

        #[test]
        fn test_format_display_date() {
            let ts = parse_timestamp("2024-01-01T00:00:00Z").unwrap();
            let utc = FixedOffset::east_opt(0).unwrap();
            assert_eq!(format_display_date(&ts, &utc, "%-m/%-d/%Y"), "1/1/2024");
            assert_eq!(format_display_date(&ts, &utc, "%d/%m/%Y"), "01/01/2024");

            // West of Greenwich the same instant is still New Year's Eve.
            let west = FixedOffset::west_opt(5 * 3600).unwrap();
            assert_eq!(format_display_date(&ts, &west, "%-m/%-d/%Y"), "12/31/2023");
        }

        #[test]
        fn test_format_display_date_uses_offset_of_each_instant() {
            // 23:30 local in winter (+1), 00:30 the next day in summer (+2).
            let winter = parse_timestamp("2024-01-01T22:30:00Z").unwrap();
            assert_eq!(format_display_date(&winter, &SummerTimeZone, "%-m/%-d/%Y"), "1/1/2024");

            let summer = parse_timestamp("2024-07-01T22:30:00Z").unwrap();
            assert_eq!(format_display_date(&summer, &SummerTimeZone, "%-m/%-d/%Y"), "7/2/2024");
        }
    }
}

/// HTML helpers for popup markup handed to the map library.
pub mod html {
    /// Escape text for inclusion in HTML element content or a quoted attribute.
    pub fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                c => out.push(c),
            }
        }
        out
    }

}
