//! Meeting-export noise recognition.
//!
//! Meeting tools export attendance grids that interleave real names with
//! timestamps, durations, column headers, and meeting codes. Anything the
//! matcher cannot place ends up in the unknowns list; this filter keeps that
//! list readable by dropping the recognizable export noise before display.

/// Column headers emitted by common meeting-attendance exports.
const EXPORT_HEADERS: [&str; 9] = [
    "SNo",
    "Participant Name",
    "Attendance Started at",
    "Joined at(beta)",
    "Attendance Stopped at",
    "Attended Duration",
    "Meeting code",
    "Not captured",
    "MERGED AUDIO",
];

/// True when a value is meeting-export noise rather than a plausible name.
#[must_use]
pub fn is_meeting_artifact(value: &str) -> bool {
    let value = value.trim();
    if value.chars().count() < 3 {
        return true;
    }
    let lower = value.to_lowercase();
    is_numberish(value)
        || is_clock_time(value)
        || is_duration(value)
        || lower.starts_with("time:")
        || lower.starts_with("time：")
        || EXPORT_HEADERS
            .iter()
            .any(|header| header.eq_ignore_ascii_case(value))
        || is_meeting_code(value)
}

/// Drop recognizable export noise, keeping order.
#[must_use]
pub fn filter_artifacts(names: &[String]) -> Vec<String> {
    names
        .iter()
        .filter(|name| !is_meeting_artifact(name))
        .cloned()
        .collect()
}

/// Digits with at most one `.`/`,`/`:` separator ("1234", "8.30", "12,").
fn is_numberish(value: &str) -> bool {
    if !value.chars().next().is_some_and(|ch| ch.is_ascii_digit()) {
        return false;
    }
    let mut separators = 0;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            continue;
        }
        if matches!(ch, '.' | ',' | ':') {
            separators += 1;
            if separators > 1 {
                return false;
            }
            continue;
        }
        return false;
    }
    true
}

/// Clock times like "8:30", "12:01:22", "8:03:18 PM".
fn is_clock_time(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    let body = lower
        .strip_suffix("am")
        .or_else(|| lower.strip_suffix("pm"))
        .map_or(lower.as_str(), str::trim_end);
    let parts: Vec<&str> = body.split(':').collect();
    if !(2..=3).contains(&parts.len()) {
        return false;
    }
    parts
        .iter()
        .all(|part| (1..=2).contains(&part.len()) && part.chars().all(|ch| ch.is_ascii_digit()))
}

/// Durations like "1 hr 7 min 11s", "56 min 8s", "10 min".
fn is_duration(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    let rest = lower.as_str();
    let Some(after_first) = eat_digits(rest) else {
        return false;
    };
    let after_first = after_first.trim_start();
    if let Some(after_hr) = after_first.strip_prefix("hr") {
        let minutes = after_hr.trim_start();
        let Some(after_digits) = eat_digits(minutes) else {
            return false;
        };
        let Some(after_min) = after_digits.trim_start().strip_prefix("min") else {
            return false;
        };
        return is_duration_tail(after_min);
    }
    match after_first.strip_prefix("min") {
        Some(after_min) => is_duration_tail(after_min),
        None => false,
    }
}

/// Optional trailing seconds segment after the minutes ("", " 8s").
fn is_duration_tail(rest: &str) -> bool {
    let rest = rest.trim_start();
    if rest.is_empty() {
        return true;
    }
    match eat_digits(rest) {
        Some(after) => after == "s",
        None => false,
    }
}

fn eat_digits(value: &str) -> Option<&str> {
    let end = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    if end == 0 { None } else { Some(&value[end..]) }
}

/// Meeting codes shaped like "fjn-uckn-rju".
fn is_meeting_code(value: &str) -> bool {
    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == 3
        && [3usize, 4, 3]
            .iter()
            .zip(&parts)
            .all(|(len, part)| {
                part.len() == *len && part.chars().all(|ch| ch.is_ascii_alphabetic())
            })
}
