//! Timestamp parsing and date widening
//!
//! Accepted timestamp strings, after trimming surrounding whitespace:
//!
//! ```text
//! yyyy
//! yyyy-[m]m
//! yyyy-[m]m-[d]d
//! yyyy-[m]m-[d]d[ |T][h]h[:[m]m[:[s]s[.f]]][zone]
//! ```
//!
//! `f` is one to nine fractional digits, truncated to microseconds. `zone`
//! is anything `ZoneId::parse` accepts (`Z`, `UTC`, `+08:00`, `GMT-3`, ...)
//! and overrides the zone passed by the caller.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pgcast_types::ZoneId;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// Parse `s` into microseconds since the epoch, resolving zone-less input in `zone`
pub fn parse_timestamp(s: &str, zone: &ZoneId) -> Option<i64> {
    let s = s.trim();
    let split = s.find([' ', 'T']);
    let (date_part, rest) = match split {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let date = parse_date(date_part)?;
    let (time, explicit_zone) = match rest {
        Some(rest) => parse_time_and_zone(rest)?,
        None => (NaiveTime::MIN, None),
    };

    let offset_seconds = explicit_zone.as_ref().unwrap_or(zone).offset_seconds() as i64;
    let local = NaiveDateTime::new(date, time).and_utc().timestamp_micros();
    local.checked_sub(offset_seconds.checked_mul(MICROS_PER_SECOND)?)
}

/// Midnight of `date` in `zone`, as microseconds since the epoch
pub fn date_to_micros(date: NaiveDate, zone: &ZoneId) -> i64 {
    let local = date.and_time(NaiveTime::MIN).and_utc().timestamp_micros();
    local - zone.offset_seconds() as i64 * MICROS_PER_SECOND
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year = parts.next()?;
    if year.len() < 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month = match parts.next() {
        Some(m) => parse_small(m)?,
        None => 1,
    };
    let day = match parts.next() {
        Some(d) => parse_small(d)?,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time_and_zone(s: &str) -> Option<(NaiveTime, Option<ZoneId>)> {
    let zone_start = s
        .find(|c: char| !(c.is_ascii_digit() || c == ':' || c == '.'))
        .unwrap_or(s.len());
    let (time_part, zone_part) = s.split_at(zone_start);

    let zone = match zone_part.trim() {
        "" => None,
        id => Some(ZoneId::parse(id).ok()?),
    };

    let mut fields = time_part.split(':');
    let hour = parse_small(fields.next()?)?;
    let minute = match fields.next() {
        Some(m) => parse_small(m)?,
        None => 0,
    };
    let (second, micro) = match fields.next() {
        Some(sec) => parse_seconds(sec)?,
        None => (0, 0),
    };
    if fields.next().is_some() {
        return None;
    }

    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, micro)?;
    Some((time, zone))
}

fn parse_seconds(s: &str) -> Option<(u32, u32)> {
    match s.split_once('.') {
        None => Some((parse_small(s)?, 0)),
        Some((whole, fraction)) => {
            if fraction.is_empty()
                || fraction.len() > 9
                || !fraction.bytes().all(|b| b.is_ascii_digit())
            {
                return None;
            }
            let mut digits: String = fraction.chars().take(6).collect();
            while digits.len() < 6 {
                digits.push('0');
            }
            Some((parse_small(whole)?, digits.parse().ok()?))
        }
    }
}

/// One or two ASCII digits
fn parse_small(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
