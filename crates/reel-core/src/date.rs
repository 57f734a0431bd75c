use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// A record timestamp, held at millisecond precision and always rendered in
/// canonical UTC form, e.g. `2023-01-01T00:00:00.000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VideoDate(Timestamp);

impl VideoDate {
    /// Parses user input into a date.
    ///
    /// Accepted forms, tried in order:
    /// - an RFC 3339 instant with an offset or `Z`
    /// - a civil date-time without offset, read as UTC
    /// - a bare calendar date, read as UTC midnight
    /// - an RFC 2822 date-time
    /// - a reduced-precision `YYYY` or `YYYY-MM`, read as the first day at
    ///   UTC midnight
    ///
    /// Returns `None` when none of them match.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let timestamp = input
            .parse::<Timestamp>()
            .ok()
            .or_else(|| {
                input
                    .parse::<civil::DateTime>()
                    .ok()
                    .and_then(|dt| dt.to_zoned(TimeZone::UTC).ok())
                    .map(|zoned| zoned.timestamp())
            })
            .or_else(|| {
                input
                    .parse::<civil::Date>()
                    .ok()
                    .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
                    .map(|zoned| zoned.timestamp())
            })
            .or_else(|| {
                jiff::fmt::rfc2822::parse(input)
                    .ok()
                    .map(|zoned| zoned.timestamp())
            })
            .or_else(|| {
                reduced_precision(input)
                    .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
                    .map(|zoned| zoned.timestamp())
            })?;

        Self::from_timestamp(timestamp)
    }

    /// Truncates `timestamp` to whole milliseconds.
    fn from_timestamp(timestamp: Timestamp) -> Option<Self> {
        Timestamp::from_millisecond(timestamp.as_millisecond())
            .ok()
            .map(Self)
    }
}

/// Reads `YYYY` or `YYYY-MM` as the first day of that year or month.
fn reduced_precision(input: &str) -> Option<civil::Date> {
    let (year, month) = match input.split_once('-') {
        Some((year, month)) => (year, Some(month)),
        None => (input, None),
    };

    let year = four_digits(year)?;
    let month = match month {
        None => 1,
        Some(month) if month.len() == 2 && month.bytes().all(|b| b.is_ascii_digit()) => {
            month.parse::<i8>().ok()?
        }
        Some(_) => return None,
    };

    civil::Date::new(year, month, 1).ok()
}

fn four_digits(year: &str) -> Option<i16> {
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

impl Display for VideoDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dt = TimeZone::UTC.to_datetime(self.0);
        let year = dt.year();
        // years outside 0000..=9999 use the expanded six-digit signed form
        if (0..=9999).contains(&year) {
            write!(f, "{:04}", year)?;
        } else {
            write!(f, "{:+07}", year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            dt.millisecond()
        )
    }
}

impl Serialize for VideoDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
