//! Snapshot message decoding
//!
//! Parses delivered message bodies into [`LeaderboardSnapshot`] values.
//! Malformed payloads surface as [`DecodeError`] so one bad message never
//! halts the trend stream.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::types::{LeaderboardEntry, LeaderboardSnapshot};

/// Error decoding a snapshot message body
#[derive(Debug)]
pub enum DecodeError {
    /// Body is not a valid JSON document
    Json(serde_json::Error),
    /// A required field is absent or has the wrong shape
    MissingField(&'static str),
    /// `leaderboard.time` could not be parsed into a timestamp
    BadTimestamp(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Json(err) => write!(f, "invalid JSON body: {}", err),
            DecodeError::MissingField(field) => write!(f, "missing required field: {}", field),
            DecodeError::BadTimestamp(raw) => write!(f, "unparsable timestamp: '{}'", raw),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err)
    }
}

/// Decode a raw message body into a snapshot.
///
/// Expected shape:
/// `{ "id": ..., "name": ..., "leaderboard": { "time": "<ISO-local>", ...score fields } }`.
/// `id` is accepted as string or number and normalized to its string form;
/// the score fields are captured verbatim with `time` lifted out.
pub fn decode(raw: &[u8]) -> Result<LeaderboardSnapshot, DecodeError> {
    let doc: Value = serde_json::from_slice(raw)?;

    let id = match doc.get("id") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(DecodeError::MissingField("id")),
    };

    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField("name"))?
        .to_string();

    let board = doc
        .get("leaderboard")
        .and_then(Value::as_object)
        .ok_or(DecodeError::MissingField("leaderboard"))?;

    let time_raw = board
        .get("time")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField("leaderboard.time"))?;
    let time = parse_local_timestamp(time_raw)?;

    let mut scores = board.clone();
    scores.remove("time");

    Ok(LeaderboardSnapshot {
        id,
        name,
        entry: LeaderboardEntry { time, scores },
    })
}

/// Parse an ISO-like local datetime string into a naive timestamp.
///
/// The string is split on every non-digit delimiter and the first six
/// components are read as year, month, day, hour, minute, second. No
/// timezone conversion is applied; an offset suffix, if present, is
/// ignored along with any fractional seconds.
pub fn parse_local_timestamp(raw: &str) -> Result<NaiveDateTime, DecodeError> {
    let bad = || DecodeError::BadTimestamp(raw.to_string());

    let fields: Vec<&str> = raw
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .collect();
    if fields.len() < 6 {
        return Err(bad());
    }

    let year: i32 = fields[0].parse().map_err(|_| bad())?;
    let num = |i: usize| fields[i].parse::<u32>().map_err(|_| bad());
    let (month, day) = (num(1)?, num(2)?);
    let (hour, minute, second) = (num(3)?, num(4)?, num(5)?);

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(bad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_local_string() {
        let ts = parse_local_timestamp("2017-05-01T12:30:07").unwrap();
        assert_eq!(ts.to_string(), "2017-05-01 12:30:07");
    }

    #[test]
    fn parses_arbitrary_delimiters() {
        let dashed = parse_local_timestamp("2017-05-01 12:30:07").unwrap();
        let slashed = parse_local_timestamp("2017/05/01@12.30.07").unwrap();
        assert_eq!(dashed, slashed);
    }

    #[test]
    fn ignores_fractional_seconds() {
        let ts = parse_local_timestamp("2017-05-01T12:30:07.123").unwrap();
        assert_eq!(ts, parse_local_timestamp("2017-05-01T12:30:07").unwrap());
    }

    #[test]
    fn rejects_missing_components() {
        assert!(parse_local_timestamp("2017-05-01T12:30").is_err());
        assert!(parse_local_timestamp("not a timestamp").is_err());
        assert!(parse_local_timestamp("").is_err());
    }

    #[test]
    fn rejects_out_of_range_components() {
        assert!(parse_local_timestamp("2017-13-01T12:30:07").is_err());
        assert!(parse_local_timestamp("2017-05-01T25:30:07").is_err());
    }

    #[test]
    fn decodes_well_formed_snapshot() {
        let body = br#"{"id": 42, "name": "weekly", "leaderboard": {"time": "2017-05-01T12:30:07", "score": 100, "rank": 1}}"#;
        let snapshot = decode(body).unwrap();
        assert_eq!(snapshot.id, "42");
        assert_eq!(snapshot.name, "weekly");
        assert_eq!(snapshot.entry.scores.get("score").unwrap(), 100);
        assert!(snapshot.entry.scores.get("time").is_none());
    }

    #[test]
    fn rejects_missing_id() {
        let body = br#"{"name": "weekly", "leaderboard": {"time": "2017-05-01T12:30:07"}}"#;
        assert!(matches!(decode(body), Err(DecodeError::MissingField("id"))));
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(matches!(decode(b"not json"), Err(DecodeError::Json(_))));
    }
}
