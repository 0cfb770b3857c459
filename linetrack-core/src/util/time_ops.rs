use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// whole seconds elapsed since midnight for a clock time.
pub fn seconds_from_midnight(time: &NaiveTime) -> i64 {
    time.num_seconds_from_midnight() as i64
}

/// builds a clock time from seconds since midnight. returns None outside of a single day.
pub fn time_from_seconds(seconds: i64) -> Option<NaiveTime> {
    if !(0..SECONDS_PER_DAY).contains(&seconds) {
        return None;
    }
    NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)
}

/// builds a clock time from fractional seconds since midnight, truncating
/// the fractional part. values outside of the day are clamped to it.
pub fn time_from_fractional_seconds(seconds: f64) -> NaiveTime {
    let whole = if seconds.is_finite() {
        (seconds.floor() as i64).clamp(0, SECONDS_PER_DAY - 1)
    } else {
        0
    };
    time_from_seconds(whole).unwrap_or(NaiveTime::MIN)
}

/// parses "HH:MM:SS" or "HH:MM" clock strings.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
}

pub fn format_hms(time: &NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

pub fn format_hm(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// renders a signed deviation as `+mm:ss` or `-mm:ss`. zero renders with a
/// plus sign and minutes are never folded into hours.
pub fn format_deviation(deviation_seconds: i64) -> String {
    let sign = if deviation_seconds >= 0 { '+' } else { '-' };
    let magnitude = deviation_seconds.unsigned_abs();
    format!("{}{:02}:{:02}", sign, magnitude / 60, magnitude % 60)
}

/// deserialize a clock time written as HH:MM or HH:MM:SS
pub fn deserialize_clock_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_clock_time(&s).map_err(serde::de::Error::custom)
}

/// serialize a clock time as HH:MM when it falls on a whole minute, otherwise HH:MM:SS.
/// this keeps definitions written by an editor ("10:00") unchanged through a round trip.
pub fn serialize_clock_time<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = if time.second() == 0 {
        format_hm(time)
    } else {
        format_hms(time)
    };
    serializer.serialize_str(&text)
}
