//! Time utilities: duration formatting, ISO 8601 duration parsing.

use chrono::TimeDelta;

/// `01:15:00`, `-00:30:00`, `26:00:00`; milliseconds only when present.
pub fn format_duration(duration: TimeDelta) -> String {
    let total_millis = duration.num_milliseconds();
    let sign = if total_millis < 0 { "-" } else { "" };
    let mut millis = total_millis.abs();
    let hours = millis / 3_600_000;
    millis %= 3_600_000;
    let minutes = millis / 60_000;
    millis %= 60_000;
    let seconds = millis / 1_000;
    let remainder = millis % 1_000;
    if remainder > 0 {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}.{remainder:03}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// Whole minutes, truncated toward zero (`total_seconds / 60`).
pub fn duration_minutes(duration: TimeDelta) -> i64 {
    duration.num_seconds() / 60
}

/// Parses the subset of ISO 8601 durations spreadsheets emit:
/// `PT1H15M`, `PT45M30.5S`, `P1DT2H`, `-PT30M`.
pub fn parse_iso_duration(s: &str) -> Option<TimeDelta> {
    let s = s.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let body = s.strip_prefix('P')?;
    if body.is_empty() {
        return None;
    }

    let mut total_ms: f64 = 0.0;
    let mut in_time = false;
    let mut number = String::new();
    // components seen in the date part / after `T`
    let mut date_parts = 0;
    let mut time_parts = 0;

    for ch in body.chars() {
        match ch {
            'T' => {
                if in_time || !number.is_empty() {
                    return None;
                }
                in_time = true;
            }
            '0'..='9' | '.' | ',' => number.push(if ch == ',' { '.' } else { ch }),
            unit => {
                let value: f64 = number.parse().ok()?;
                number.clear();
                let unit_ms = match (unit, in_time) {
                    ('W', false) => 7.0 * 86_400_000.0,
                    ('D', false) => 86_400_000.0,
                    ('H', true) => 3_600_000.0,
                    ('M', true) => 60_000.0,
                    ('S', true) => 1_000.0,
                    _ => return None,
                };
                total_ms += value * unit_ms;
                if in_time {
                    time_parts += 1;
                } else {
                    date_parts += 1;
                }
            }
        }
    }

    // `PT`, `P1DT` and a dangling number are not durations
    if !number.is_empty() || (in_time && time_parts == 0) || date_parts + time_parts == 0 {
        return None;
    }

    let ms = total_ms.round() as i64;
    let delta = TimeDelta::try_milliseconds(ms)?;
    Some(if negative { -delta } else { delta })
}
