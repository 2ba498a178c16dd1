//! Shared utility functions for CDV crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Format of `LOCAL_DATE` in station dumps: "YYYY-MM-DD HH:MM:SS"
    pub const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Parse a `LOCAL_DATE` value. Accepts the full timestamp form as well as
    /// a bare "YYYY-MM-DD".
    pub fn parse_local_date(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        match NaiveDateTime::parse_from_str(s, LOCAL_DATE_FORMAT) {
            Ok(dt) => Ok(dt.date()),
            Err(_) => Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?),
        }
    }

    /// English name of a month (1-12).
    pub fn month_name(month: u32) -> Option<&'static str> {
        let index = usize::try_from(month).ok()?.checked_sub(1)?;
        MONTH_NAMES.get(index).copied()
    }

    /// Parse a month given as a number ("6") or a name ("June", "jun").
    pub fn parse_month(s: &str) -> Result<u32, crate::error::DateError> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u32>() {
            return Ok(n);
        }
        MONTH_NAMES
            .iter()
            .position(|name| {
                name.eq_ignore_ascii_case(s)
                    || (s.len() >= 3 && name.to_ascii_lowercase().starts_with(&s.to_ascii_lowercase()))
            })
            .map(|i| i as u32 + 1)
            .ok_or_else(|| crate::error::DateError(format!("not a month: {s}")))
    }

    /// Number of days in a month, or None for an invalid year/month.
    pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some((next - first).num_days() as u32)
    }

}

/// Resolution of dropped file URLs to local paths
pub mod paths {
    use crate::error::UrlError;
    use std::path::PathBuf;

    /// Resolve a dropped `file://` URL (or a plain path) to a local path.
    ///
    /// Only local files are accepted: the host must be empty or `localhost`.
    /// Percent-escapes in the path are decoded.
    pub fn file_url_to_path(url: &str) -> Result<PathBuf, UrlError> {
        let url = url.trim();
        let Some((scheme, rest)) = url.split_once("://") else {
            if url.is_empty() {
                return Err(UrlError(url.to_string()));
            }
            return Ok(PathBuf::from(url));
        };
        if !scheme.eq_ignore_ascii_case("file") {
            return Err(UrlError(url.to_string()));
        }
        let path = match rest.find('/') {
            Some(0) => rest,
            Some(i) if rest[..i].eq_ignore_ascii_case("localhost") => &rest[i..],
            _ => return Err(UrlError(url.to_string())),
        };
        let decoded = percent_decode(path).ok_or_else(|| UrlError(url.to_string()))?;
        Ok(PathBuf::from(decoded))
    }

    fn percent_decode(s: &str) -> Option<String> {
        let bytes = s.as_bytes();
        let mut out = Vec::with_capacity(bytes.len());
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'%' {
                let hex = s.get(i + 1..i + 3)?;
                out.push(u8::from_str_radix(hex, 16).ok()?);
                i += 3;
            } else {
                out.push(bytes[i]);
                i += 1;
            }
        }
        String::from_utf8(out).ok()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::path::PathBuf;

        #[test]
        fn test_file_url_to_path() {
            assert_eq!(
                file_url_to_path("file:///home/user/Downloads/climate-daily.json").unwrap(),
                PathBuf::from("/home/user/Downloads/climate-daily.json")
            );
            assert_eq!(
                file_url_to_path("file://localhost/tmp/a%20b.json").unwrap(),
                PathBuf::from("/tmp/a b.json")
            );
        }

        #[test]
        fn test_plain_path_passes_through() {
            assert_eq!(
                file_url_to_path("data/station.json").unwrap(),
                PathBuf::from("data/station.json")
            );
        }

        #[test]
        fn test_rejects_non_local_urls() {
            assert!(file_url_to_path("https://example.org/station.json").is_err());
            assert!(file_url_to_path("file://fileserver/share/station.json").is_err());
            assert!(file_url_to_path("file:///tmp/bad%zz.json").is_err());
            assert!(file_url_to_path("").is_err());
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}

    /// A dropped URL that does not point at a local file.
    #[derive(Debug)]
    pub struct UrlError(pub String);

    impl fmt::Display for UrlError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Unsupported URL (expected a file:// URL or a path): {}", self.0)
        }
    }

    impl std::error::Error for UrlError {}
}
