//! Date-expression parsing for the check instant and the upcoming horizon.
//!
//! Configuration carries both values as strings, so the accepted forms stay
//! close to what operators actually write: absolute dates or datetimes for
//! the check instant (plus a raw Unix epoch), and `+7 days`-style relative
//! offsets for the horizon.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::errors::{BoardwatchError, Result};

/// Parse a check-instant expression.
///
/// Accepted forms, tried in order: numeric Unix epoch (seconds), RFC 3339,
/// `YYYY-MM-DD HH:MM:SS` (interpreted as UTC), and bare `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_check_instant(expr: &str) -> Result<DateTime<Utc>> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(BoardwatchError::DateParse("empty date expression".into()));
    }

    if let Ok(epoch) = trimmed.parse::<i64>() {
        return Utc
            .timestamp_opt(epoch, 0)
            .single()
            .ok_or_else(|| BoardwatchError::DateParse(format!("epoch {trimmed} out of range")));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            BoardwatchError::DateParse(format!("date {trimmed} has no midnight"))
        })?;
        return Ok(Utc.from_utc_datetime(&midnight));
    }

    Err(BoardwatchError::DateParse(format!("unrecognized date expression '{trimmed}'")))
}

/// Parse a relative horizon expression such as `+7 days`, `2 weeks`,
/// `36 hours`, or `90m`. The leading `+` is optional.
pub fn parse_horizon(expr: &str) -> Result<Duration> {
    let trimmed = expr.trim().trim_start_matches('+').trim();

    let unit_start = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| horizon_error(expr))?;
    let (number, unit) = trimmed.split_at(unit_start);
    let amount: i64 = number.parse().map_err(|_| horizon_error(expr))?;

    match unit.trim() {
        "m" | "min" | "mins" | "minute" | "minutes" => Ok(Duration::minutes(amount)),
        "h" | "hour" | "hours" => Ok(Duration::hours(amount)),
        "d" | "day" | "days" => Ok(Duration::days(amount)),
        "w" | "week" | "weeks" => Ok(Duration::weeks(amount)),
        _ => Err(horizon_error(expr)),
    }
}

fn horizon_error(expr: &str) -> BoardwatchError {
    BoardwatchError::DateParse(format!("unrecognized horizon expression '{expr}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_date_as_utc_midnight() {
        let instant = parse_check_instant("2024-06-01").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_datetime() {
        let instant = parse_check_instant("2024-06-01T14:30:00Z").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap());
    }

    #[test]
    fn parses_space_separated_datetime() {
        let instant = parse_check_instant("2024-06-01 14:30:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap());
    }

    #[test]
    fn parses_numeric_epoch() {
        let instant = parse_check_instant("1717250400").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap());
    }

    #[test]
    fn rejects_unrecognized_date_expression() {
        let err = parse_check_instant("next tuesday-ish").unwrap_err();
        assert!(matches!(err, BoardwatchError::DateParse(_)));
    }

    #[test]
    fn rejects_empty_date_expression() {
        let err = parse_check_instant("   ").unwrap_err();
        assert!(matches!(err, BoardwatchError::DateParse(_)));
    }

    #[test]
    fn parses_day_horizons() {
        assert_eq!(parse_horizon("+7 days").unwrap(), Duration::days(7));
        assert_eq!(parse_horizon("1 day").unwrap(), Duration::days(1));
        assert_eq!(parse_horizon("3d").unwrap(), Duration::days(3));
    }

    #[test]
    fn parses_week_hour_and_minute_horizons() {
        assert_eq!(parse_horizon("2 weeks").unwrap(), Duration::weeks(2));
        assert_eq!(parse_horizon("36 hours").unwrap(), Duration::hours(36));
        assert_eq!(parse_horizon("90m").unwrap(), Duration::minutes(90));
    }

    #[test]
    fn rejects_horizon_without_a_unit() {
        let err = parse_horizon("7").unwrap_err();
        assert!(matches!(err, BoardwatchError::DateParse(_)));
    }

    #[test]
    fn rejects_unrecognized_horizon_expression() {
        let err = parse_horizon("soonish").unwrap_err();
        assert!(matches!(err, BoardwatchError::DateParse(_)));
    }
}
